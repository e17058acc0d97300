//! Binary that runs the demonstration tile grid and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `grid_fixture [--policy <toml>] [--trace] [--heap] [--render]`
//!
//! Output: `key=value` lines from `RunReport::to_lines`.

use wayfinder_harness::worlds::grid::GridWorld;

fn main() -> anyhow::Result<()> {
    let world = GridWorld::demo()?;
    lock_tests::cli::run_fixture(&world)
}
