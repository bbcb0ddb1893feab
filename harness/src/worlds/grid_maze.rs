//! `GridMaze`: 4-connected maze parsed from an ASCII layout.
//!
//! Layout characters: `%` wall, `P` start (exactly one), `.` goal (at
//! least one), space open floor. Every move costs 1.
//!
//! Positions are `(row, col)` with row 0 at the top.

use std::collections::BTreeSet;
use std::fmt;

use waypoint_search::{SearchError, SearchProblem, Successor};

/// The tiny maze: shortest solution is 8 moves
/// (`S S W S W W S W`).
pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%";

/// A slightly larger maze with a dead-end branch and a loop.
pub const SMALL_MAZE: &str = "\
%%%%%%%%%%
%P   %   %
% %% % % %
% %    % %
% %%%%%% %
%      % %
%%%% % % %
%    %  .%
%%%%%%%%%%";

/// `(row, col)`, row 0 at the top.
pub type Position = (usize, usize);

/// One step of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Successor order used by [`GridMaze`].
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The neighbouring position in this direction, if it does not underflow.
    #[must_use]
    pub fn step(self, (row, col): Position) -> Option<Position> {
        match self {
            Self::North => Some((row.checked_sub(1)?, col)),
            Self::South => Some((row + 1, col)),
            Self::East => Some((row, col + 1)),
            Self::West => Some((row, col.checked_sub(1)?)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// Rejected maze layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has width {width}, expected {expected}")]
    Ragged {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown cell {ch:?} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, ch: char },
    #[error("layout has no start cell `P`")]
    NoStart,
    #[error("layout has more than one start cell `P`")]
    MultipleStarts,
    #[error("layout has no goal cell `.`")]
    NoGoal,
    #[error("position ({row}, {col}) is outside a {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// A maze with one start and a set of goal cells.
#[derive(Debug, Clone)]
pub struct GridMaze {
    id: String,
    walls: Vec<Vec<bool>>,
    start: Position,
    goals: BTreeSet<Position>,
}

impl GridMaze {
    /// Parse an ASCII layout.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] for an empty or ragged layout, an unknown
    /// character, or a missing/duplicated start or missing goal. Blank lines
    /// are trimmed from both ends; a blank line inside the layout is ragged.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<&str> = layout.lines().collect();
        while rows.last().is_some_and(|l| l.is_empty()) {
            rows.pop();
        }
        let leading = rows.iter().take_while(|l| l.is_empty()).count();
        rows.drain(..leading);
        let expected = rows.first().ok_or(LayoutError::Empty)?.chars().count();

        let mut walls = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut goals = BTreeSet::new();

        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != expected {
                return Err(LayoutError::Ragged {
                    row,
                    width,
                    expected,
                });
            }
            let mut cells = Vec::with_capacity(width);
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '%' => cells.push(true),
                    ' ' => cells.push(false),
                    '.' => {
                        goals.insert((row, col));
                        cells.push(false);
                    }
                    'P' => {
                        if start.replace((row, col)).is_some() {
                            return Err(LayoutError::MultipleStarts);
                        }
                        cells.push(false);
                    }
                    ch => return Err(LayoutError::UnknownCell { row, col, ch }),
                }
            }
            walls.push(cells);
        }

        let start = start.ok_or(LayoutError::NoStart)?;
        if goals.is_empty() {
            return Err(LayoutError::NoGoal);
        }

        Ok(Self {
            id: "grid_maze".into(),
            walls,
            start,
            goals,
        })
    }

    /// A wall-free `height x width` room.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Empty`] for a zero dimension and
    /// [`LayoutError::OutOfBounds`] if `start` or `goal` is off the grid.
    pub fn open(
        height: usize,
        width: usize,
        start: Position,
        goal: Position,
    ) -> Result<Self, LayoutError> {
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }
        for (row, col) in [start, goal] {
            if row >= height || col >= width {
                return Err(LayoutError::OutOfBounds {
                    row,
                    col,
                    height,
                    width,
                });
            }
        }
        Ok(Self {
            id: format!("open_{height}x{width}"),
            walls: vec![vec![false; width]; height],
            start,
            goals: BTreeSet::from([goal]),
        })
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn goals(&self) -> &BTreeSet<Position> {
        &self.goals
    }

    /// Whether `pos` is inside the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, (row, col): Position) -> bool {
        self.walls
            .get(row)
            .and_then(|cells| cells.get(col))
            .is_some_and(|wall| !wall)
    }

    fn move_from(&self, pos: Position, direction: Direction) -> Option<Position> {
        direction.step(pos).filter(|&next| self.is_open(next))
    }
}

impl SearchProblem for GridMaze {
    type State = Position;
    type Action = Direction;
    type Cost = u64;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction, u64>> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.move_from(*state, d).map(|next| Successor::new(next, d, 1)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Result<u64, SearchError> {
        let mut pos = self.start;
        for (index, &direction) in actions.iter().enumerate() {
            pos = self
                .move_from(pos, direction)
                .ok_or_else(|| SearchError::InvalidActionSequence {
                    index,
                    detail: format!("{direction} from {pos:?} hits a wall"),
                })?;
        }
        Ok(actions.len() as u64)
    }
}

/// Manhattan distance to the nearest goal. Admissible and consistent for
/// unit-cost 4-connected moves.
#[must_use]
pub fn manhattan_heuristic(state: &Position, maze: &GridMaze) -> u64 {
    maze.goals
        .iter()
        .map(|goal| (state.0.abs_diff(goal.0) + state.1.abs_diff(goal.1)) as u64)
        .min()
        .unwrap_or(0)
}
