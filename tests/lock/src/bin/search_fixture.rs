//! Binary that runs the fixed scenario set through the harness and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `<problem>.<strategy>=sha256:<hex>` line per run, then
//! `run_count=<n>`. Logs go to stderr (`RUST_LOG`, default `warn`) so they
//! never reach the compared output.

use lock_tests::fixture_digest_lines;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let lines = fixture_digest_lines();
    for line in &lines {
        println!("{line}");
    }
    println!("run_count={}", lines.len());
}
