//! Expansion audit log.
//!
//! Recorded only when [`crate::policy::SearchPolicy::record_trace`] is set.
//! The ordered list of [`ExpandEvent`]s is the decision record of one
//! search: which node was expanded, when, and which children it produced.

use crate::frontier::FrontierPolicy;
use crate::node::NodeId;

/// Ordered expansion events of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchTrace<C> {
    pub frontier_policy: FrontierPolicy,
    pub expansions: Vec<ExpandEvent<C>>,
}

impl<C> SearchTrace<C> {
    #[must_use]
    pub fn new(frontier_policy: FrontierPolicy) -> Self {
        Self {
            frontier_policy,
            expansions: Vec::new(),
        }
    }

    /// Node ids in the order they were expanded.
    #[must_use]
    pub fn expansion_order(&self) -> Vec<NodeId> {
        self.expansions.iter().map(|e| e.node).collect()
    }
}

/// One pop-and-expand step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent<C> {
    /// Position in the total order of expansions (0-based).
    pub expansion_order: u64,
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub depth: u32,
    pub g_cost: C,
    /// Children pushed onto the frontier, in successor order.
    pub children: Vec<NodeId>,
    /// Successors dropped because their state was already expanded.
    pub duplicates_suppressed: u64,
}
