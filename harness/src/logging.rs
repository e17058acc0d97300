//! Diagnostic tracing for fixtures and tools built on the harness.
//!
//! Search and runner events go to stderr through `tracing`; stdout stays
//! reserved for fixture output, so enabling logs never changes what a
//! cross-process comparison sees.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output is compact and on stderr.
///
/// ```bash
/// RUST_LOG=wayfinder_search=debug cargo run -p lock-tests --bin grid_fixture
/// ```
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
