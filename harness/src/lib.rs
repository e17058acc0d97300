//! Wayfinder Harness: concrete worlds and a runner for the search engine.
//!
//! The harness runs a world through `wayfinder_search` and packages the
//! result as a [`runner::RunReport`] bound to digests of the world and the
//! policy that produced it.
//!
//! The harness does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]

pub mod contract;
pub mod logging;
pub mod runner;
pub mod worlds;
