//! Typed search errors.
//!
//! `SearchError` covers contract and invariant violations only. "No
//! solution" is not an error: an exhausted frontier (or an exhausted
//! expansion budget) returns an empty action sequence and is reported via
//! [`crate::engine::Termination`].

/// An optional problem capability a caller asked for.
///
/// `start_state`, `is_goal` and `successors` are required trait methods and
/// cannot be missing, so only the provided methods appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CostOfActions,
}

impl Capability {
    /// Stable snake-case name, used in error text and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CostOfActions => "cost_of_actions",
        }
    }
}

/// Problem callback in which a panic was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicStage {
    /// `SearchProblem::start_state()` panicked.
    StartState,
    /// `SearchProblem::is_goal()` panicked.
    IsGoal,
    /// `SearchProblem::successors()` panicked.
    Successors,
    /// `Heuristic::estimate()` panicked.
    Heuristic,
}

/// Failure of a single search invocation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The problem does not supply an operation the caller needs.
    #[error("problem does not implement `{}`", capability.as_str())]
    UnimplementedCapability { capability: Capability },

    /// `pop()` was called on an empty frontier.
    #[error("pop from empty frontier")]
    EmptyFrontierPop,

    /// The parent chain of `node` does not lead back to the root.
    #[error("inconsistent parent relation at node {node}: {detail}")]
    InconsistentParentRelation { node: usize, detail: String },

    /// `successors()` reported a step cost that is below zero or not a number.
    #[error("invalid step cost {cost} from node {node}")]
    InvalidStepCost { node: usize, cost: String },

    /// A problem or heuristic callback panicked.
    #[error("problem callback panicked during {stage:?}")]
    ProblemPanicked { stage: PanicStage },

    /// An action sequence could not be applied from the start state.
    #[error("action {index} is not applicable: {detail}")]
    InvalidActionSequence { index: usize, detail: String },

    /// The search policy was rejected before any step was taken.
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Rejected search policy.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The TOML document could not be parsed into a policy.
    #[error("invalid policy TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// `max_expansions = 0` would terminate before the first expansion.
    #[error("max_expansions must be at least 1")]
    ZeroExpansionBudget,
}
