//! Harness runner: drives a world through the search engine and reports.
//!
//! The runner owns orchestration only. It binds the result to the world's
//! description and the policy that produced it, so two reports can be compared
//! byte-for-byte across runs and processes.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → describe() → hash world + policy
//!   → search(start) → [step × N] → path + stats + trace digest → RunReport
//! ```

use wayfinder_search::trace::canonical_hash;
use wayfinder_search::{search, Cost, RunOutcome, SearchError, SearchPolicy, SearchStats};

use crate::contract::{SearchWorld, WorldError};

/// Domain prefix for the world description digest.
pub const DOMAIN_WORLD_DESCRIPTION: &[u8] = b"WAYFINDER::WORLD_DESCRIPTION::V1\0";

/// Domain prefix for the search policy digest.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"WAYFINDER::SEARCH_POLICY::V1\0";

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The search engine rejected the policy or failed to encode its trace.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The world could not be built.
    #[error(transparent)]
    World(#[from] WorldError),
    /// World description or policy could not be serialized for hashing.
    #[error("failed to encode run inputs: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result of running one world to completion (or to its step budget).
#[derive(Debug, Clone)]
pub struct RunReport<A> {
    pub world_id: String,
    /// `sha256` of the world's canonical description.
    pub world_digest: String,
    /// `sha256` of the canonical policy JSON.
    pub policy_digest: String,
    pub outcome: RunOutcome,
    /// Actions from start to goal; empty unless `outcome` is `Found`.
    pub path: Vec<A>,
    /// Display names of `path`, in order.
    pub action_names: Vec<String>,
    pub path_cost: Option<Cost>,
    pub stats: SearchStats,
    pub frontier_high_water: u64,
    /// Trace digest when the policy recorded a trace.
    pub trace_digest: Option<String>,
}

impl<A> RunReport<A> {
    /// `key=value` lines in a fixed order, for fixtures and cross-process
    /// comparison.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("world_id={}", self.world_id),
            format!("world_digest={}", self.world_digest),
            format!("policy_digest={}", self.policy_digest),
            format!("outcome={}", outcome_label(self.outcome)),
            format!("path_len={}", self.path.len()),
            format!("path={}", self.action_names.join(",")),
        ];
        lines.push(match self.path_cost {
            Some(cost) => format!("path_cost={cost}"),
            None => "path_cost=none".to_string(),
        });
        lines.push(format!("steps={}", self.stats.steps));
        lines.push(format!("nodes_created={}", self.stats.nodes_created));
        lines.push(format!("replacements={}", self.stats.replacements));
        lines.push(format!("frontier_high_water={}", self.frontier_high_water));
        lines.push(format!(
            "trace_digest={}",
            self.trace_digest.as_deref().unwrap_or("none")
        ));
        lines
    }
}

/// Stable lowercase label for a run outcome.
#[must_use]
pub fn outcome_label(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Found => "found",
        RunOutcome::Exhausted => "exhausted",
        RunOutcome::BudgetExhausted => "budget_exhausted",
    }
}

/// Run `world` from its start state under `policy`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy is invalid or the trace cannot
/// be encoded, and [`RunError::Encode`] if the world description cannot be
/// serialized.
pub fn run_world<W: SearchWorld>(
    world: &W,
    policy: &SearchPolicy,
) -> Result<RunReport<W::Action>, RunError> {
    policy.validate()?;

    let world_id = world.world_id().to_string();
    let description = serde_json::to_vec(&world.describe())?;
    let world_digest = canonical_hash(DOMAIN_WORLD_DESCRIPTION, &description);
    let policy_json = serde_json::to_vec(&serde_json::to_value(policy)?)?;
    let policy_digest = canonical_hash(DOMAIN_SEARCH_POLICY, &policy_json);

    tracing::info!(world = %world_id, %world_digest, ?policy, "starting world run");

    let (mut state, outcome) = search(world.start(), world, policy)?;

    let trace_digest = state.trace().map(|t| t.digest()).transpose()?;
    let path = state.take_path();
    let action_names = path.iter().map(|a| world.action_name(a)).collect();

    let report = RunReport {
        world_id,
        world_digest,
        policy_digest,
        outcome,
        path_cost: state.path_cost(),
        stats: state.stats().clone(),
        frontier_high_water: state.frontier_high_water(),
        trace_digest,
        path,
        action_names,
    };

    tracing::info!(
        world = %report.world_id,
        outcome = outcome_label(outcome),
        path_len = report.path.len(),
        steps = report.stats.steps,
        "world run finished"
    );
    Ok(report)
}
