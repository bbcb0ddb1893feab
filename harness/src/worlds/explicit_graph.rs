//! `ExplicitGraph`: a finite weighted digraph given edge by edge.
//!
//! Successors are listed in edge insertion order, so the order of `edge()`
//! calls decides tie-breaks between equally good paths.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use waypoint_search::{SearchError, SearchProblem, Successor};

/// Traverse the edge `from -> to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeAction {
    pub from: String,
    pub to: String,
}

impl fmt::Display for EdgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A weighted directed graph with a start vertex and a goal set.
#[derive(Debug, Clone)]
pub struct ExplicitGraph {
    id: String,
    start: String,
    goals: BTreeSet<String>,
    edges: BTreeMap<String, Vec<(String, u64)>>,
}

impl ExplicitGraph {
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            id: "explicit_graph".into(),
            start: start.into(),
            goals: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a directed edge. Repeated edges are kept as parallel edges.
    #[must_use]
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, cost: u64) -> Self {
        self.edges
            .entry(from.into())
            .or_default()
            .push((to.into(), cost));
        self
    }

    /// Add an undirected edge (two directed edges of equal cost).
    #[must_use]
    pub fn bidirectional(self, a: impl Into<String>, b: impl Into<String>, cost: u64) -> Self {
        let (a, b) = (a.into(), b.into());
        self.edge(a.clone(), b.clone(), cost).edge(b, a, cost)
    }

    #[must_use]
    pub fn goal(mut self, vertex: impl Into<String>) -> Self {
        self.goals.insert(vertex.into());
        self
    }

    /// `A->B (1)`, `A->C (5)`, `B->D (1)`, `C->D (1)`, start `A`, goal `D`.
    ///
    /// Cheapest path is `A->B->D` (cost 2); `A->C->D` has the same length
    /// but costs 6.
    #[must_use]
    pub fn diamond() -> Self {
        Self::new("A")
            .with_id("diamond")
            .edge("A", "B", 1)
            .edge("A", "C", 5)
            .edge("B", "D", 1)
            .edge("C", "D", 1)
            .goal("D")
    }

    fn edge_cost(&self, from: &str, to: &str) -> Option<u64> {
        self.edges
            .get(from)?
            .iter()
            .filter(|(target, _)| target == to)
            .map(|&(_, cost)| cost)
            .min()
    }
}

impl SearchProblem for ExplicitGraph {
    type State = String;
    type Action = EdgeAction;
    type Cost = u64;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, EdgeAction, u64>> {
        self.edges
            .get(state)
            .map(|out| {
                out.iter()
                    .map(|(to, cost)| {
                        Successor::new(
                            to.clone(),
                            EdgeAction {
                                from: state.clone(),
                                to: to.clone(),
                            },
                            *cost,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn cost_of_actions(&self, actions: &[EdgeAction]) -> Result<u64, SearchError> {
        let mut at = self.start.as_str();
        let mut total = 0u64;
        for (index, action) in actions.iter().enumerate() {
            if action.from != at {
                return Err(SearchError::InvalidActionSequence {
                    index,
                    detail: format!("{action} does not leave current vertex {at}"),
                });
            }
            let cost = self.edge_cost(&action.from, &action.to).ok_or_else(|| {
                SearchError::InvalidActionSequence {
                    index,
                    detail: format!("no edge {action}"),
                }
            })?;
            total = total.saturating_add(cost);
            at = action.to.as_str();
        }
        Ok(total)
    }
}
