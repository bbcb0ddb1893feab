//! Problem definitions driven by the harness runner.

pub mod eight_puzzle;
pub mod explicit_graph;
pub mod grid_maze;
