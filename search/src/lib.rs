//! Waypoint Search: a generic state-space search engine.
//!
//! One traversal loop ([`engine::graph_search`]) drives every strategy. The
//! strategies differ only in the frontier ordering they plug in and the
//! priority key they compute per node:
//!
//! ```text
//! strategy        frontier    key
//! depth-first     stack       ()
//! breadth-first   queue       ()
//! uniform-cost    priority    g(n)
//! A*              priority    g(n) + h(n)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`]: the capability set a problem exposes to the engine
//! - [`Frontier`]: push/pop container with stack, queue and priority orderings
//! - [`VisitedSet`]: states that have already been expanded
//! - [`NodeArena`]: search nodes with write-once parent links
//! - [`SearchOutcome`]: actions, termination reason and counters of one run
//! - [`SearchPolicy`]: expansion budget, depth cutoff and trace recording
//! - [`Heuristic`]: cost-to-go estimate consumed by A*
//!
//! # Example
//!
//! ```
//! use waypoint_search::{breadth_first_search, SearchProblem, Successor};
//!
//! struct Line;
//!
//! impl SearchProblem for Line {
//!     type State = u32;
//!     type Action = &'static str;
//!     type Cost = u32;
//!
//!     fn start_state(&self) -> u32 {
//!         0
//!     }
//!
//!     fn is_goal(&self, state: &u32) -> bool {
//!         *state == 3
//!     }
//!
//!     fn successors(&self, state: &u32) -> Vec<Successor<u32, &'static str, u32>> {
//!         vec![Successor::new(state + 1, "step", 1)]
//!     }
//! }
//!
//! let actions = breadth_first_search(&Line).unwrap();
//! assert_eq!(actions, vec!["step"; 3]);
//! ```

#![forbid(unsafe_code)]

pub mod contract;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod policy;
pub mod strategy;
pub mod trace;
pub mod visited;

pub use contract::{Cost, SearchProblem, Successor};
pub use engine::{graph_search, SearchOutcome, SearchStats, Termination};
pub use error::{Capability, PanicStage, PolicyError, SearchError};
pub use frontier::{Frontier, FrontierPolicy, PriorityFrontier, QueueFrontier, StackFrontier};
pub use heuristic::{Heuristic, NullHeuristic};
pub use node::{NodeArena, NodeId, SearchNode};
pub use path::{reconstruct_actions, reconstruct_path};
pub use policy::SearchPolicy;
pub use strategy::{
    a_star_search, astar, bfs, breadth_first_search, depth_first_search, dfs, solve, ucs,
    uniform_cost_search, Strategy, UnknownStrategy,
};
pub use trace::{ExpandEvent, SearchTrace};
pub use visited::VisitedSet;
