//! Set of expanded states.

use std::collections::HashSet;
use std::hash::Hash;

/// States that have been expanded in the current search.
///
/// A state enters the set when it is popped for the first time, not when it
/// is discovered; a state may sit on the frontier several times before then.
#[derive(Debug, Clone)]
pub struct VisitedSet<S> {
    expanded: HashSet<S>,
}

impl<S: Eq + Hash + Clone> VisitedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }

    /// Record `state` as expanded.
    ///
    /// Returns `false` if it already was (the caller must then skip it).
    pub fn mark_expanded(&mut self, state: &S) -> bool {
        if self.expanded.contains(state) {
            return false;
        }
        self.expanded.insert(state.clone())
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.expanded.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl<S: Eq + Hash + Clone> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
