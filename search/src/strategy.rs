//! The four search strategies as instantiations of [`graph_search`].
//!
//! | strategy | frontier | key |
//! |---|---|---|
//! | depth-first | stack | `()` |
//! | breadth-first | queue | `()` |
//! | uniform-cost | priority | `g(n)` |
//! | A* | priority | `g(n) + h(n)` |

use std::fmt;
use std::str::FromStr;

use crate::contract::{Cost, SearchProblem};
use crate::engine::{graph_search, guarded, path_cost_key, unkeyed, SearchOutcome};
use crate::error::{PanicStage, SearchError};
use crate::frontier::{FrontierPolicy, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{Heuristic, NullHeuristic};
use crate::policy::SearchPolicy;

/// A search strategy, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Stable snake-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
            Self::UniformCost => "uniform_cost",
            Self::AStar => "a_star",
        }
    }

    #[must_use]
    pub fn frontier_policy(self) -> FrontierPolicy {
        match self {
            Self::DepthFirst => FrontierPolicy::Stack,
            Self::BreadthFirst => FrontierPolicy::Queue,
            Self::UniformCost | Self::AStar => FrontierPolicy::Priority,
        }
    }

    /// Whether the strategy returns a minimum-cost path (A* only under an
    /// admissible, consistent heuristic).
    #[must_use]
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy `{0}` (expected dfs, bfs, ucs or astar)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirstsearch" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirstsearch" => Ok(Self::BreadthFirst),
            "ucs" | "uniform_cost" | "uniformcostsearch" => Ok(Self::UniformCost),
            "astar" | "a_star" | "astarsearch" => Ok(Self::AStar),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Run `strategy` on `problem` and return the full outcome.
///
/// `heuristic` is consulted by [`Strategy::AStar`] only; pass
/// [`NullHeuristic`] when there is none.
///
/// # Errors
///
/// See [`graph_search`]. A panicking heuristic surfaces as
/// [`SearchError::ProblemPanicked`] with [`PanicStage::Heuristic`].
pub fn solve<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::Action, P::Cost>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    match strategy {
        Strategy::DepthFirst => graph_search(problem, StackFrontier::new(), unkeyed, policy),
        Strategy::BreadthFirst => graph_search(problem, QueueFrontier::new(), unkeyed, policy),
        Strategy::UniformCost => {
            graph_search(problem, PriorityFrontier::new(), path_cost_key, policy)
        }
        Strategy::AStar => graph_search(
            problem,
            PriorityFrontier::new(),
            |node| {
                let h = guarded(PanicStage::Heuristic, || {
                    heuristic.estimate(&node.state, problem)
                })?;
                Ok(node.g_cost.add_step(h))
            },
            policy,
        ),
    }
}

/// Deepest nodes first. Returns any path to a goal.
///
/// # Errors
///
/// See [`graph_search`].
pub fn depth_first_search<P: SearchProblem + ?Sized>(
    problem: &P,
) -> Result<Vec<P::Action>, SearchError> {
    solve(problem, Strategy::DepthFirst, &NullHeuristic, &SearchPolicy::default())
        .map(|outcome| outcome.actions)
}

/// Shallowest nodes first. Returns a path with the fewest actions.
///
/// # Errors
///
/// See [`graph_search`].
pub fn breadth_first_search<P: SearchProblem + ?Sized>(
    problem: &P,
) -> Result<Vec<P::Action>, SearchError> {
    solve(problem, Strategy::BreadthFirst, &NullHeuristic, &SearchPolicy::default())
        .map(|outcome| outcome.actions)
}

/// Cheapest accumulated cost first. Returns a minimum-cost path.
///
/// # Errors
///
/// See [`graph_search`].
pub fn uniform_cost_search<P: SearchProblem + ?Sized>(
    problem: &P,
) -> Result<Vec<P::Action>, SearchError> {
    solve(problem, Strategy::UniformCost, &NullHeuristic, &SearchPolicy::default())
        .map(|outcome| outcome.actions)
}

/// Lowest `g + h` first. Returns a minimum-cost path when `heuristic` is
/// admissible and consistent.
///
/// # Errors
///
/// See [`solve`].
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    solve(problem, Strategy::AStar, heuristic, &SearchPolicy::default())
        .map(|outcome| outcome.actions)
}

pub use self::a_star_search as astar;
pub use self::breadth_first_search as bfs;
pub use self::depth_first_search as dfs;
pub use self::uniform_cost_search as ucs;
