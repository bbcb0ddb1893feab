//! Run reports: canonical JSON plus a domain-separated content digest.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_report.json          canonical JSON of the report
//!   run_report_digest.txt    "sha256:<hex>" over DOMAIN_RUN_REPORT || bytes
//! ```
//!
//! The directory path is never part of the digest. Verification recomputes
//! the digest from `run_report.json` and also rejects a report file that is
//! valid JSON but not in canonical form.

use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};
use waypoint_search::SearchStats;

use crate::canon::{canonical_json_bytes, CanonError};

/// Domain prefix for run report hashing (null-terminated).
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYPOINT::RUN_REPORT::V1\0";

pub const REPORT_FILENAME: &str = "run_report.json";
pub const DIGEST_FILENAME: &str = "run_report_digest.txt";

/// Everything observable about one search run, after plan validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub problem_id: String,
    pub strategy: String,
    pub frontier_policy: String,
    pub termination: String,
    pub goal_reached: bool,
    pub goal_depth: Option<u32>,
    /// `Display` rendering of each action, in order.
    pub actions: Vec<String>,
    /// Cost accumulated by the engine along the returned path.
    pub path_cost: Option<serde_json::Value>,
    /// Cost recomputed by the problem's own `cost_of_actions`, when it has one.
    pub validated_cost: Option<serde_json::Value>,
    pub stats: SearchStats,
    /// Expanded node indices in expansion order, when the trace was recorded.
    pub expansion_order: Option<Vec<usize>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Canon(#[from] CanonError),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("run_report.json is not in canonical form")]
    NotCanonical,
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

/// Canonical JSON bytes of `report`.
///
/// # Errors
///
/// [`ReportError::Canon`] if a cost serializes to a non-integer number.
pub fn report_bytes(report: &RunReport) -> Result<Vec<u8>, ReportError> {
    let value = serde_json::to_value(report)?;
    Ok(canonical_json_bytes(&value)?)
}

/// `"sha256:<hex>"` of [`DOMAIN_RUN_REPORT`] followed by `bytes`.
#[must_use]
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_RUN_REPORT);
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Digest of the canonical form of `report`.
///
/// # Errors
///
/// See [`report_bytes`].
pub fn report_digest(report: &RunReport) -> Result<String, ReportError> {
    Ok(digest_bytes(&report_bytes(report)?))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ReportError + '_ {
    move |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Write `report` and its digest into `dir`, creating it if needed.
/// Returns the digest.
///
/// # Errors
///
/// [`ReportError::Io`] on filesystem failure, or any error from
/// [`report_bytes`].
pub fn write_report(report: &RunReport, dir: &Path) -> Result<String, ReportError> {
    let bytes = report_bytes(report)?;
    let digest = digest_bytes(&bytes);

    std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    let report_path = dir.join(REPORT_FILENAME);
    std::fs::write(&report_path, &bytes).map_err(io_error(&report_path))?;
    let digest_path = dir.join(DIGEST_FILENAME);
    std::fs::write(&digest_path, digest.as_bytes()).map_err(io_error(&digest_path))?;

    tracing::debug!(dir = %dir.display(), %digest, "run report written");
    Ok(digest)
}

/// Re-read a directory written by [`write_report`] and check its digest.
/// Returns the verified digest.
///
/// # Errors
///
/// - [`ReportError::Io`] if either file is missing or unreadable.
/// - [`ReportError::Serialize`] if the report is not JSON.
/// - [`ReportError::NotCanonical`] if the report bytes are not canonical.
/// - [`ReportError::DigestMismatch`] if the stored digest is wrong.
pub fn verify_report_dir(dir: &Path) -> Result<String, ReportError> {
    let report_path = dir.join(REPORT_FILENAME);
    let bytes = std::fs::read(&report_path).map_err(io_error(&report_path))?;
    let digest_path = dir.join(DIGEST_FILENAME);
    let stored = std::fs::read_to_string(&digest_path).map_err(io_error(&digest_path))?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    if canonical_json_bytes(&value)? != bytes {
        return Err(ReportError::NotCanonical);
    }

    let recomputed = digest_bytes(&bytes);
    let stored = stored.trim().to_string();
    if stored != recomputed {
        return Err(ReportError::DigestMismatch { stored, recomputed });
    }
    Ok(recomputed)
}
