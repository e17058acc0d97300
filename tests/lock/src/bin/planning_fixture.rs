//! Binary that runs the demonstration resource-planning world and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `planning_fixture [--policy <toml>] [--trace] [--heap] [--render]`

use wayfinder_harness::worlds::planning::PlanningWorld;

fn main() -> anyhow::Result<()> {
    lock_tests::cli::run_fixture(&PlanningWorld::demo())
}
