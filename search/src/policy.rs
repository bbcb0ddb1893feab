//! Search policy: budgets and recording options.

use serde::Deserialize;

use crate::error::PolicyError;

/// Budget and recording configuration for one search invocation.
///
/// Every field has a default, so a TOML document only names what it changes:
///
/// ```toml
/// max_expansions = 5000
/// record_trace = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (calls to `successors`).
    pub max_expansions: u64,
    /// Nodes at this depth are goal-tested but not expanded.
    pub max_depth: u32,
    /// Record an [`crate::trace::ExpandEvent`] per expansion.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Parse a policy from TOML and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidToml`] for malformed input or unknown
    /// keys, and any error from [`SearchPolicy::validate`].
    pub fn from_toml_str(toml_str: &str) -> Result<Self, PolicyError> {
        let policy: Self = toml::from_str(toml_str)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reject policies that cannot run a single expansion.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroExpansionBudget`] if `max_expansions` is 0.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_expansions == 0 {
            return Err(PolicyError::ZeroExpansionBudget);
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
            max_depth: u32::MAX,
            record_trace: false,
        }
    }
}
