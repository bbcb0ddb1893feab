//! Cost-to-go estimates for A*.

use crate::contract::{Cost, SearchProblem};

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// # Preconditions
///
/// Not checked by the engine:
///
/// - `estimate >= 0`, and `0` at every goal state.
/// - Admissible (never above the true remaining cost) for A* to return a
///   minimum-cost path.
/// - Consistent (`h(s) <= step_cost(s, s') + h(s')`) for the pop-time goal
///   test to be valid without reopening expanded states.
///
/// A violation degrades solution quality; it does not raise an error.
///
/// Any `Fn(&State, &Problem) -> Cost` closure is a heuristic.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The constant-zero heuristic. A* under it expands like uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}
