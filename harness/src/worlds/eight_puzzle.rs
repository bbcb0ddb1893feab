//! `EightPuzzle`: the 3x3 sliding-tile puzzle.
//!
//! A board is nine cells in row-major order, `0` being the blank. The goal
//! board is `0 1 2 / 3 4 5 / 6 7 8`. Actions name the direction the blank
//! moves; every move costs 1.

use std::fmt;

use waypoint_search::{SearchError, SearchProblem, Successor};

pub type Tiles = [u8; 9];

pub const GOAL_TILES: Tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8];

const SIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PuzzleMove {
    Up,
    Down,
    Left,
    Right,
}

impl PuzzleMove {
    /// Successor order used by [`EightPuzzle`].
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl fmt::Display for PuzzleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("tiles are not a permutation of 0..=8: {tiles:?}")]
    NotAPermutation { tiles: Tiles },
    #[error("board has odd inversion parity and cannot reach the goal")]
    Unsolvable,
    #[error("move {index} ({mv}) slides the blank off the board")]
    IllegalMove { index: usize, mv: PuzzleMove },
}

/// Index of the blank in `tiles`. Boards built through [`EightPuzzle`] always
/// contain exactly one.
fn blank(tiles: &Tiles) -> usize {
    tiles.iter().position(|&t| t == 0).unwrap_or(0)
}

/// Apply one blank move, or `None` if it leaves the board.
#[must_use]
pub fn apply_move(tiles: &Tiles, mv: PuzzleMove) -> Option<Tiles> {
    let at = blank(tiles);
    let (row, col) = (at / SIDE, at % SIDE);
    let to = match mv {
        PuzzleMove::Up if row > 0 => at - SIDE,
        PuzzleMove::Down if row + 1 < SIDE => at + SIDE,
        PuzzleMove::Left if col > 0 => at - 1,
        PuzzleMove::Right if col + 1 < SIDE => at + 1,
        _ => return None,
    };
    let mut next = *tiles;
    next.swap(at, to);
    Some(next)
}

fn inversions(tiles: &Tiles) -> usize {
    let numbered: Vec<u8> = tiles.iter().copied().filter(|&t| t != 0).collect();
    numbered
        .iter()
        .enumerate()
        .map(|(i, a)| numbered[i + 1..].iter().filter(|b| *b < a).count())
        .sum()
}

/// A puzzle instance: a start board searched toward [`GOAL_TILES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EightPuzzle {
    start: Tiles,
}

impl EightPuzzle {
    /// Build a puzzle from an explicit start board.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::NotAPermutation`] if `tiles` is not a permutation of
    /// `0..=8`; [`PuzzleError::Unsolvable`] if its inversion count is odd.
    pub fn from_tiles(tiles: Tiles) -> Result<Self, PuzzleError> {
        let mut seen = [false; 9];
        for &t in &tiles {
            match seen.get_mut(usize::from(t)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotAPermutation { tiles }),
            }
        }
        if inversions(&tiles) % 2 != 0 {
            return Err(PuzzleError::Unsolvable);
        }
        Ok(Self { start: tiles })
    }

    /// Start from the goal board and apply `moves`.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::IllegalMove`] if a move slides the blank off the board.
    pub fn scrambled(moves: &[PuzzleMove]) -> Result<Self, PuzzleError> {
        let mut tiles = GOAL_TILES;
        for (index, &mv) in moves.iter().enumerate() {
            tiles = apply_move(&tiles, mv).ok_or(PuzzleError::IllegalMove { index, mv })?;
        }
        Ok(Self { start: tiles })
    }

    #[must_use]
    pub fn start(&self) -> Tiles {
        self.start
    }
}

impl SearchProblem for EightPuzzle {
    type State = Tiles;
    type Action = PuzzleMove;
    type Cost = u32;

    fn problem_id(&self) -> &str {
        "eight_puzzle"
    }

    fn start_state(&self) -> Tiles {
        self.start
    }

    fn is_goal(&self, state: &Tiles) -> bool {
        *state == GOAL_TILES
    }

    fn successors(&self, state: &Tiles) -> Vec<Successor<Tiles, PuzzleMove, u32>> {
        PuzzleMove::ALL
            .into_iter()
            .filter_map(|mv| apply_move(state, mv).map(|next| Successor::new(next, mv, 1)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[PuzzleMove]) -> Result<u32, SearchError> {
        let mut tiles = self.start;
        for (index, &mv) in actions.iter().enumerate() {
            tiles = apply_move(&tiles, mv).ok_or_else(|| SearchError::InvalidActionSequence {
                index,
                detail: format!("blank cannot move {mv}"),
            })?;
        }
        Ok(u32::try_from(actions.len()).unwrap_or(u32::MAX))
    }
}

/// Number of numbered tiles out of place.
#[must_use]
pub fn misplaced_tiles(state: &Tiles, _puzzle: &EightPuzzle) -> u32 {
    let count = state
        .iter()
        .zip(GOAL_TILES.iter())
        .filter(|&(&t, &g)| t != 0 && t != g)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Sum over numbered tiles of the grid distance to their goal cell.
#[must_use]
pub fn manhattan_distance(state: &Tiles, _puzzle: &EightPuzzle) -> u32 {
    let total: usize = state
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != 0)
        .map(|(at, &t)| {
            let home = usize::from(t);
            (at / SIDE).abs_diff(home / SIDE) + (at % SIDE).abs_diff(home % SIDE)
        })
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}
