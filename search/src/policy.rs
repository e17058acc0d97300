//! Search policy: driving budget, frontier strategy, and trace recording.
//!
//! Policies are usually built in code via [`SearchPolicy::default`], but can
//! also be loaded from TOML:
//!
//! ```toml
//! max_steps = 10000
//! frontier = "indexed_heap"
//! record_trace = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Configuration for driving a search to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Maximum number of steps taken by a single [`crate::search::run`] call.
    /// `None` drives the search until it concludes.
    pub max_steps: Option<u64>,
    /// Frontier selection strategy.
    pub frontier: FrontierMode,
    /// Record an expansion trace on the search state.
    pub record_trace: bool,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_steps: None,
            frontier: FrontierMode::LinearScan,
            record_trace: false,
        }
    }
}

impl SearchPolicy {
    /// Reject policies that can never make progress.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_steps` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_steps == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_steps must be at least 1 (omit it for no limit)".into(),
            });
        }
        Ok(())
    }

    /// Parse and validate a policy from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PolicyParse`] for malformed TOML or unknown
    /// keys, and [`SearchError::InvalidPolicy`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        let policy: Self = toml::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read, parse and validate a policy file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PolicyRead`] if the file cannot be read, plus
    /// any error from [`SearchPolicy::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path).map_err(|source| SearchError::PolicyRead {
            path: path.to_path_buf(),
            source,
        })?;
        let policy = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?policy, "loaded search policy");
        Ok(policy)
    }
}

/// Frontier selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierMode {
    /// Scan every frontier entry on each pop. Simple; fine for small spaces.
    #[default]
    LinearScan,
    /// Binary heap with lazy invalidation of replaced entries.
    IndexedHeap,
}
