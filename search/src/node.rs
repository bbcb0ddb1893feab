//! Search nodes and the arena that owns them.
//!
//! Nodes reference their parent by [`NodeId`], an index into the arena. The
//! parent link is written when the node is inserted and never changes, so
//! the arena doubles as the parent relation used for path reconstruction.

use crate::contract::{Cost, Successor};
use crate::error::SearchError;

/// Opaque handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order (root = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// One node of the search tree.
///
/// Two nodes with the same `state` are the same expansion target; the visited
/// set is keyed by state, never by node.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A, C> {
    pub id: NodeId,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    pub state: S,
    /// The action that produced this node (`None` for the root).
    pub action: Option<A>,
    /// Sum of step costs from the root along the parent chain.
    pub g_cost: C,
    /// Number of actions from the root.
    pub depth: u32,
}

/// Append-only node storage for one search invocation.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A, C> {
    nodes: Vec<SearchNode<S, A, C>>,
}

impl<S, A, C: Cost> NodeArena<S, A, C> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert the synthetic start node: no parent, no action, zero cost.
    pub fn insert_root(&mut self, state: S) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            id,
            parent: None,
            state,
            action: None,
            g_cost: C::zero(),
            depth: 0,
        });
        id
    }

    /// Insert a child of `parent` reached through `successor`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InconsistentParentRelation`] if `parent` is not
    /// a node of this arena.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        successor: Successor<S, A, C>,
    ) -> Result<NodeId, SearchError> {
        let (g_cost, depth) = {
            let p = self.get(parent)?;
            (
                p.g_cost.add_step(successor.step_cost),
                p.depth.saturating_add(1),
            )
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            id,
            parent: Some(parent),
            state: successor.state,
            action: Some(successor.action),
            g_cost,
            depth,
        });
        Ok(id)
    }

    /// Look up a node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InconsistentParentRelation`] for an id that this
    /// arena never issued.
    pub fn get(&self, id: NodeId) -> Result<&SearchNode<S, A, C>, SearchError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| SearchError::InconsistentParentRelation {
                node: id.0,
                detail: format!("node id outside arena of {} nodes", self.nodes.len()),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A, C>> {
        self.nodes.iter()
    }
}

impl<S, A, C: Cost> Default for NodeArena<S, A, C> {
    fn default() -> Self {
        Self::new()
    }
}
