//! Cross-process determinism.
//!
//! Spawns the fixture binaries under several environment variants and
//! asserts that all produce identical output, and that the output matches
//! an in-process run. Report production must not be influenced by
//! process-level state.

use std::io::Write;
use std::path::Path;

use lock_tests::fixture::{field, run_variant, workspace_root};
use wayfinder_harness::runner::run_world;
use wayfinder_harness::worlds::grid::GridWorld;
use wayfinder_harness::worlds::planning::PlanningWorld;
use wayfinder_search::{FrontierMode, SearchPolicy};

fn assert_env_invariant(name: &str, args: &[&str]) -> String {
    let root = workspace_root();
    let baseline = run_variant(name, args, &root, &[]);

    let alt_cwd = Path::new("/tmp");
    assert_eq!(
        baseline,
        run_variant(name, args, alt_cwd, &[]),
        "{name}: output differs when cwd changes"
    );
    assert_eq!(
        baseline,
        run_variant(name, args, &root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "{name}: output differs when LC_ALL=C LANG=C"
    );
    assert_eq!(
        baseline,
        run_variant(
            name,
            args,
            &root,
            &[
                ("WAYFINDER_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
                ("RUST_LOG", "wayfinder_search=trace"),
            ],
        ),
        "{name}: output differs with spurious env vars or logging enabled"
    );
    baseline
}

// ---------------------------------------------------------------------------
// Environment variants
// ---------------------------------------------------------------------------

#[test]
fn grid_fixture_crossproc_env_variants() {
    let out = assert_env_invariant("grid_fixture", &["--trace"]);
    assert_eq!(field(&out, "world_id"), Some("tile_grid"));
    assert_eq!(field(&out, "outcome"), Some("found"));
    assert!(field(&out, "trace_digest").unwrap().starts_with("sha256:"));
}

#[test]
fn planning_fixture_crossproc_env_variants() {
    let out = assert_env_invariant("planning_fixture", &["--trace", "--heap"]);
    assert_eq!(field(&out, "world_id"), Some("resource_planning"));
    assert_eq!(field(&out, "outcome"), Some("found"));
    assert_eq!(field(&out, "path_len"), Some("30"));
    assert_eq!(field(&out, "path_cost"), Some("9910"));
}

// ---------------------------------------------------------------------------
// Process output equals in-process report
// ---------------------------------------------------------------------------

#[test]
fn grid_fixture_matches_in_process_run() {
    let out = run_variant("grid_fixture", &["--trace", "--heap"], &workspace_root(), &[]);
    let policy = SearchPolicy {
        frontier: FrontierMode::IndexedHeap,
        record_trace: true,
        ..SearchPolicy::default()
    };
    let report = run_world(&GridWorld::demo().unwrap(), &policy).unwrap();
    let expected: String = report.to_lines().iter().map(|l| format!("{l}\n")).collect();
    assert_eq!(out, expected);
}

#[test]
fn frontier_flag_changes_only_the_policy_digest() {
    let root = workspace_root();
    let linear = run_variant("grid_fixture", &["--trace"], &root, &[]);
    let heap = run_variant("grid_fixture", &["--trace", "--heap"], &root, &[]);
    for line in linear.lines().zip(heap.lines()) {
        if line.0.starts_with("policy_digest=") {
            assert_ne!(line.0, line.1);
        } else {
            assert_eq!(line.0, line.1);
        }
    }
}

#[test]
fn planning_fixture_reads_policy_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"max_steps = 5\nfrontier = \"indexed_heap\"\n")
        .unwrap();
    let path = file.path().to_str().unwrap();
    let out = run_variant(
        "planning_fixture",
        &["--policy", path],
        &workspace_root(),
        &[],
    );
    assert_eq!(field(&out, "outcome"), Some("budget_exhausted"));
    assert_eq!(field(&out, "steps"), Some("5"));
    assert_eq!(field(&out, "trace_digest"), Some("none"));

    let policy = SearchPolicy {
        max_steps: Some(5),
        frontier: FrontierMode::IndexedHeap,
        ..SearchPolicy::default()
    };
    let report = run_world(&PlanningWorld::demo(), &policy).unwrap();
    assert_eq!(
        field(&out, "policy_digest"),
        Some(report.policy_digest.as_str())
    );
}

#[test]
fn render_flag_prints_the_level_then_the_solution() {
    let out = run_variant("grid_fixture", &["--render"], &workspace_root(), &[]);
    assert!(out.starts_with("Search level:\n1111111111111\n"), "{out}");
    let (level, result) = out.split_once("Path found (").expect("result follows the level");
    assert!(!level.contains('2'), "bare level is unmarked: {level}");
    assert!(result.contains('2'), "solution marks the trail: {result}");
    assert!(out.contains("\n1111111111111\n"));
}
