//! World contract: what the runner needs beyond a searchable domain.
//!
//! A world is a [`SearchDomain`] plus a start state, a stable identifier,
//! a canonical description for digest binding, and console rendering of a
//! solution. Worlds may NOT drive the search themselves; stepping, budgets,
//! and trace recording are runner concerns.

use wayfinder_search::SearchDomain;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A level description could not be parsed.
    #[error("invalid level at row {row}, column {column}: {detail}")]
    InvalidLevel {
        row: usize,
        column: usize,
        detail: String,
    },
    /// A start or goal position is not an open cell.
    #[error("{role} position ({x}, {y}) is not an open cell")]
    BlockedEndpoint { role: &'static str, x: i32, y: i32 },
}

/// The contract a world must implement to be run by the harness runner.
pub trait SearchWorld: SearchDomain {
    /// Unique world identifier (e.g., `"tile_grid"`).
    fn world_id(&self) -> &str;

    /// The state the search starts from.
    fn start(&self) -> Self::State;

    /// Canonical description of the world's fixed inputs (level, goal,
    /// action list). Hashed into the run report so results are bound to the
    /// world they came from.
    fn describe(&self) -> serde_json::Value;

    /// Human-readable name of an action.
    fn action_name(&self, action: &Self::Action) -> String;

    /// Console rendering of the world as it is before searching, for worlds
    /// that have a picture worth printing.
    fn render_level(&self) -> Option<String> {
        None
    }

    /// Console rendering of a solution path from the start state.
    fn render(&self, path: &[Self::Action]) -> String;
}
