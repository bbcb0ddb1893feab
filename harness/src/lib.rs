//! Waypoint Harness: concrete problems and auditable search runs.
//!
//! The harness does NOT implement search; it delegates to
//! `waypoint_search`. Worlds supply problem definitions; the runner replays
//! every returned plan against the problem before it is reported, and the
//! report layer turns a run into canonical JSON with a content digest.
//!
//! ```text
//! world (SearchProblem) → solve() → replay_plan() → RunReport
//!   → canonical_json_bytes() → report_digest() → write_report()
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod report;
pub mod runner;
pub mod worlds;
