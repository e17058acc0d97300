//! `SearchTrace`: per-step expansion log.
//!
//! Recorded only when the policy asks for it. The ordered list of
//! [`ExpandEvent`]s is the decision surface: which node was settled, and what
//! happened to every candidate action tried from it. Serialized as canonical
//! JSON (sorted keys, compact) so two runs can be compared by digest.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::SearchError;
use crate::node::{Cost, NodeId};

/// Domain prefix for trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"WAYFINDER::SEARCH_TRACE::V1\0";

/// The complete expansion log of one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchTrace {
    /// Settle events in step order.
    pub expansions: Vec<ExpandEvent>,
    /// How the search concluded, once it has.
    pub termination: Option<Termination>,
}

/// One step: a node was taken off the frontier and settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandEvent {
    /// Zero-based step number.
    pub step: u64,
    /// The settled node.
    pub node: usize,
    /// Priority at the time it was selected.
    pub priority: Cost,
    /// Cumulative path cost of the settled node.
    pub total_cost: Cost,
    /// A previous settlement of the same state was overwritten.
    pub overwrote_settled: bool,
    /// The settled node satisfied the goal test.
    pub goal: bool,
    /// Candidate decisions, in action order. Empty for the goal node.
    pub candidates: Vec<CandidateRecord>,
}

/// A candidate action with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    /// Position of the action in the domain's action list.
    pub action_index: usize,
    pub outcome: CandidateOutcome,
}

/// What happened to a candidate during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// `is_legal` rejected the action.
    Illegal,
    /// The successor state was already settled.
    AlreadySettled,
    /// A new frontier entry was created.
    Inserted { node: usize },
    /// A cheaper route replaced the frontier entry for the successor.
    Replaced { node: usize, replaced: usize },
    /// The frontier already held a route at least as cheap.
    Discarded { total_cost: Cost },
}

/// Terminal record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Termination {
    Found {
        node: usize,
        path_len: usize,
        total_cost: Cost,
    },
    Exhausted,
}

impl CandidateOutcome {
    pub(crate) fn inserted(node: NodeId) -> Self {
        Self::Inserted { node: node.index() }
    }

    pub(crate) fn replaced(node: NodeId, replaced: NodeId) -> Self {
        Self::Replaced {
            node: node.index(),
            replaced: replaced.index(),
        }
    }
}

impl SearchTrace {
    /// Serialize the trace to canonical JSON bytes.
    ///
    /// `serde_json` objects are key-sorted maps, so `to_value` followed by
    /// compact `to_vec` yields sorted keys with no whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TraceEncode`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_vec(&value)?)
    }

    /// Domain-separated SHA-256 digest of the canonical JSON, formatted as
    /// `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TraceEncode`] if serialization fails.
    pub fn digest(&self) -> Result<String, SearchError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_TRACE, &bytes))
    }

    /// Number of candidates per outcome kind: `(inserted, replaced, discarded)`.
    #[must_use]
    pub fn frontier_updates(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for outcome in self
            .expansions
            .iter()
            .flat_map(|e| e.candidates.iter().map(|c| c.outcome))
        {
            match outcome {
                CandidateOutcome::Inserted { .. } => counts.0 += 1,
                CandidateOutcome::Replaced { .. } => counts.1 += 1,
                CandidateOutcome::Discarded { .. } => counts.2 += 1,
                CandidateOutcome::Illegal | CandidateOutcome::AlreadySettled => {}
            }
        }
        counts
    }
}

/// `sha256(domain || data)` as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
