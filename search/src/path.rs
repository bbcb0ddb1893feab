//! Backward path reconstruction over the node arena.

use crate::contract::Cost;
use crate::error::SearchError;
use crate::node::{NodeArena, NodeId};

/// Node ids from the root to `goal`, inclusive.
///
/// # Errors
///
/// Returns [`SearchError::InconsistentParentRelation`] if a parent id is
/// dangling or the chain is longer than the arena (a cycle).
pub fn reconstruct_path<S, A, C: Cost>(
    arena: &NodeArena<S, A, C>,
    goal: NodeId,
) -> Result<Vec<NodeId>, SearchError> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        if path.len() >= arena.len() {
            return Err(SearchError::InconsistentParentRelation {
                node: id.index(),
                detail: "parent chain does not terminate".into(),
            });
        }
        path.push(id);
        current = arena.get(id)?.parent;
    }

    path.reverse();
    Ok(path)
}

/// The actions along the path from the root to `goal`, in execution order.
///
/// The root contributes no action; every other node contributes exactly one.
///
/// # Errors
///
/// Returns [`SearchError::InconsistentParentRelation`] if the chain is
/// broken, a non-root node has no action, or the root carries one.
pub fn reconstruct_actions<S, A: Clone, C: Cost>(
    arena: &NodeArena<S, A, C>,
    goal: NodeId,
) -> Result<Vec<A>, SearchError> {
    let path = reconstruct_path(arena, goal)?;
    let mut actions = Vec::with_capacity(path.len().saturating_sub(1));

    for id in path {
        let node = arena.get(id)?;
        match (node.parent, &node.action) {
            (None, None) => {}
            (Some(_), Some(action)) => actions.push(action.clone()),
            (None, Some(_)) => {
                return Err(SearchError::InconsistentParentRelation {
                    node: id.index(),
                    detail: "root node carries an action".into(),
                });
            }
            (Some(_), None) => {
                return Err(SearchError::InconsistentParentRelation {
                    node: id.index(),
                    detail: "non-root node has no incoming action".into(),
                });
            }
        }
    }

    Ok(actions)
}
