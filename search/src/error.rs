//! Typed search errors.
//!
//! `SearchError` represents pre-flight and configuration failures only.
//! Search outcomes (goal found, frontier exhausted, step budget spent) are
//! results, expressed via [`crate::search::StepResult`] and
//! [`crate::search::RunOutcome`].

use std::path::PathBuf;

/// Typed failure for policy loading, validation, and trace encoding.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A policy value that can never make progress.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The policy TOML could not be parsed.
    #[error("failed to parse search policy: {0}")]
    PolicyParse(#[from] toml::de::Error),

    /// The policy file could not be read.
    #[error("failed to read search policy {}: {source}", .path.display())]
    PolicyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The expansion trace could not be serialized.
    #[error("failed to encode search trace: {0}")]
    TraceEncode(#[from] serde_json::Error),
}
