//! In-process determinism: N=10 runs produce identical reports.

use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::runner::run_world;
use wayfinder_harness::worlds::grid::GridWorld;
use wayfinder_harness::worlds::planning::PlanningWorld;
use wayfinder_search::{search, FrontierMode, SearchPolicy};

fn traced(frontier: FrontierMode) -> SearchPolicy {
    SearchPolicy {
        frontier,
        record_trace: true,
        ..SearchPolicy::default()
    }
}

#[test]
fn grid_report_deterministic_n10() {
    let world = GridWorld::demo().unwrap();
    let first = run_world(&world, &traced(FrontierMode::LinearScan))
        .unwrap()
        .to_lines();
    for i in 1..10 {
        let again = run_world(&world, &traced(FrontierMode::LinearScan))
            .unwrap()
            .to_lines();
        assert_eq!(first, again, "grid report differed on run {i}");
    }
}

#[test]
fn planning_report_deterministic_n10() {
    let world = PlanningWorld::demo();
    let first = run_world(&world, &traced(FrontierMode::IndexedHeap))
        .unwrap()
        .to_lines();
    for i in 1..10 {
        let again = run_world(&world, &traced(FrontierMode::IndexedHeap))
            .unwrap()
            .to_lines();
        assert_eq!(first, again, "planning report differed on run {i}");
    }
}

#[test]
fn trace_bytes_deterministic_n10() {
    let world = GridWorld::demo().unwrap();
    let policy = traced(FrontierMode::IndexedHeap);
    let bytes = || {
        let (state, _) = search(world.start(), &world, &policy).unwrap();
        state.trace().unwrap().to_canonical_json_bytes().unwrap()
    };
    let first = bytes();
    for i in 1..10 {
        assert_eq!(first, bytes(), "trace bytes differed on run {i}");
    }
}
