//! Search problem contract.

use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;

use crate::error::{Capability, SearchError};

/// Numeric path cost.
///
/// Costs must be totally ordered so they can key a priority frontier.
/// Floating-point problems use [`OrderedFloat`].
pub trait Cost: Copy + Ord + Debug {
    /// The additive identity (cost of the empty path).
    fn zero() -> Self;

    /// Accumulate one step. Integer costs saturate instead of overflowing.
    #[must_use]
    fn add_step(self, step: Self) -> Self;

    /// Whether this cost is below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Whether this cost is acceptable as a single step: a number `>= 0`.
    fn is_valid_step(&self) -> bool {
        !self.is_negative()
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                fn zero() -> Self {
                    0
                }

                fn add_step(self, step: Self) -> Self {
                    self.saturating_add(step)
                }
            }
        )*
    };
}

impl_integer_cost!(u8, u16, u32, u64, usize, i32, i64);

impl Cost for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn add_step(self, step: Self) -> Self {
        self + step
    }

    // `OrderedFloat` sorts NaN above every number, so the default check
    // would let it through.
    fn is_valid_step(&self) -> bool {
        self.0 >= 0.0
    }
}

impl Cost for OrderedFloat<f32> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn add_step(self, step: Self) -> Self {
        self + step
    }

    // `OrderedFloat` sorts NaN above every number, so the default check
    // would let it through.
    fn is_valid_step(&self) -> bool {
        self.0 >= 0.0
    }
}

/// One transition produced by [`SearchProblem::successors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A, C> {
    /// The state reached.
    pub state: S,
    /// The action that reaches it.
    pub action: A,
    /// Non-negative cost of this single step.
    pub step_cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    #[must_use]
    pub fn new(state: S, action: A, step_cost: C) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// The capability set the engine consumes.
///
/// The engine never inspects a state beyond `Eq` and `Hash`; it stores,
/// compares and forwards them.
///
/// # Contract
///
/// - `is_goal` is pure: repeated calls on the same state agree.
/// - `successors` terminates, returns step costs `>= 0`, and is deterministic
///   within one invocation. Its order is the tie-break order among
///   equal-priority successors and is observable when several optimal paths
///   exist.
/// - `cost_of_actions` is for callers validating a plan; the engine tracks
///   cost incrementally and never calls it.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;
    type Cost: Cost;

    /// Identifier used in log spans and run reports.
    fn problem_id(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`, in a deterministic order.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Vec<Successor<Self::State, Self::Action, Self::Cost>>;

    /// Total cost of applying `actions` in order from the start state.
    ///
    /// # Errors
    ///
    /// The default body returns [`SearchError::UnimplementedCapability`].
    /// Implementations return [`SearchError::InvalidActionSequence`] when an
    /// action is not applicable.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Result<Self::Cost, SearchError> {
        let _ = actions;
        Err(SearchError::UnimplementedCapability {
            capability: Capability::CostOfActions,
        })
    }
}
