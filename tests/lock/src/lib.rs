//! Shared helpers for the lock tests and the `search_fixture` binary.

use std::cell::RefCell;
use std::collections::HashMap;

use waypoint_harness::report::{report_digest, RunReport};
use waypoint_harness::runner::run_problem;
use waypoint_harness::worlds::eight_puzzle::{manhattan_distance, EightPuzzle, PuzzleMove};
use waypoint_harness::worlds::explicit_graph::ExplicitGraph;
use waypoint_harness::worlds::grid_maze::{manhattan_heuristic, GridMaze, SMALL_MAZE, TINY_MAZE};
use waypoint_search::{NullHeuristic, SearchError, SearchPolicy, SearchProblem, Strategy, Successor};

/// Wraps a problem and counts `successors` calls per state.
pub struct CountingProblem<P: SearchProblem> {
    pub inner: P,
    calls: RefCell<HashMap<P::State, u32>>,
}

impl<P: SearchProblem> CountingProblem<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: RefCell::new(HashMap::new()),
        }
    }

    /// Total `successors` calls.
    #[must_use]
    pub fn expansions(&self) -> u32 {
        self.calls.borrow().values().sum()
    }

    /// Largest number of `successors` calls on any one state.
    #[must_use]
    pub fn max_calls_per_state(&self) -> u32 {
        self.calls.borrow().values().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn was_expanded(&self, state: &P::State) -> bool {
        self.calls.borrow().contains_key(state)
    }
}

impl<P: SearchProblem> SearchProblem for CountingProblem<P> {
    type State = P::State;
    type Action = P::Action;
    type Cost = P::Cost;

    fn problem_id(&self) -> &str {
        self.inner.problem_id()
    }

    fn start_state(&self) -> P::State {
        self.inner.start_state()
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }

    fn successors(&self, state: &P::State) -> Vec<Successor<P::State, P::Action, P::Cost>> {
        *self.calls.borrow_mut().entry(state.clone()).or_insert(0) += 1;
        self.inner.successors(state)
    }

    fn cost_of_actions(&self, actions: &[P::Action]) -> Result<P::Cost, SearchError> {
        self.inner.cost_of_actions(actions)
    }
}

/// The fixed scenario set used for determinism checks. Every entry is
/// `(label, report)`.
///
/// The expansion budget keeps depth-first runs on the puzzle bounded; a
/// budget stop is as deterministic as a goal.
///
/// # Panics
///
/// Panics if a built-in world fails to build or a run fails.
#[must_use]
pub fn fixture_reports() -> Vec<(String, RunReport)> {
    let policy = SearchPolicy {
        max_expansions: 20_000,
        record_trace: true,
        ..SearchPolicy::default()
    };
    let tiny = GridMaze::parse(TINY_MAZE).expect("tiny maze parses").with_id("tiny_maze");
    let small = GridMaze::parse(SMALL_MAZE).expect("small maze parses").with_id("small_maze");
    let puzzle = EightPuzzle::scrambled(&[
        PuzzleMove::Down,
        PuzzleMove::Right,
        PuzzleMove::Down,
        PuzzleMove::Left,
        PuzzleMove::Up,
        PuzzleMove::Right,
    ])
    .expect("scramble stays on the board");
    let diamond = ExplicitGraph::diamond();

    let mut reports = Vec::new();
    for strategy in Strategy::ALL {
        let runs = [
            (
                diamond.problem_id().to_string(),
                run_problem(&diamond, strategy, &NullHeuristic, &policy),
            ),
            (
                tiny.problem_id().to_string(),
                run_problem(&tiny, strategy, &manhattan_heuristic, &policy),
            ),
            (
                small.problem_id().to_string(),
                run_problem(&small, strategy, &manhattan_heuristic, &policy),
            ),
            (
                puzzle.problem_id().to_string(),
                run_problem(&puzzle, strategy, &manhattan_distance, &policy),
            ),
        ];
        for (id, result) in runs {
            let report = result.unwrap_or_else(|e| panic!("{id}/{strategy} failed: {e}"));
            reports.push((format!("{id}.{}", strategy.name()), report));
        }
    }
    reports
}

/// `label=digest` lines for [`fixture_reports`], in a fixed order.
///
/// # Panics
///
/// Panics if a report cannot be digested.
#[must_use]
pub fn fixture_digest_lines() -> Vec<String> {
    fixture_reports()
        .into_iter()
        .map(|(label, report)| {
            let digest = report_digest(&report).expect("integer costs digest");
            format!("{label}={digest}")
        })
        .collect()
}
