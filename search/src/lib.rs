//! Wayfinder Search: generic, resumable A* over caller-defined state spaces.
//!
//! The engine is parameterized over an arbitrary state type and action type.
//! Callers supply the goal test, the ordered action list, the edge cost, the
//! heuristic, and a legality guard, either as a [`SearchDomain`] impl or as
//! plain closures through [`advance`]. Each call performs one expansion step,
//! so a search can be driven to completion or in bounded slices.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_search  ←  wayfinder_harness
//! (nodes, frontier,    (grid + planning worlds,
//!  step function)       runner, logging)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`]: immutable record of a discovered state, arena-indexed
//! - [`Frontier`]: open set with replace-on-cheaper-route semantics
//! - [`SearchState`]: per-search arena, frontier, settled set, and path
//! - [`step`] / [`advance`]: one expansion; [`run`] / [`search`] drive to completion
//! - [`SearchPolicy`]: step budget, frontier strategy, trace recording
//! - [`SearchTrace`]: optional expansion log with a canonical digest

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod state;
pub mod trace;

pub use contract::{Action, FnDomain, SearchDomain};
pub use error::SearchError;
pub use frontier::Frontier;
pub use node::{Cost, NodeId, SearchNode};
pub use policy::{FrontierMode, SearchPolicy};
pub use search::{advance, run, search, step, RunOutcome, StepResult};
pub use state::{SearchState, SearchStats};
pub use trace::SearchTrace;
