//! Tile-grid scenario: the demonstration level end to end.

use std::collections::{BTreeMap, VecDeque};

use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::runner::run_world;
use wayfinder_harness::worlds::grid::{
    find_path, GridWorld, Move, Position, TileGrid, DEMO_GOAL, DEMO_START,
};
use wayfinder_search::{advance, Action, RunOutcome, SearchPolicy, SearchState};

/// Breadth-first distance between two open cells.
fn bfs_distance(grid: &TileGrid, start: Position, goal: Position) -> Option<usize> {
    let mut seen = BTreeMap::from([(start, 0usize)]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        let d = seen[&pos];
        if pos == goal {
            return Some(d);
        }
        for m in Move::ALL {
            let next = m.apply(&pos);
            if grid.is_open(next) && !seen.contains_key(&next) {
                seen.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn assert_walkable(grid: &TileGrid, start: Position, goal: Position, path: &[Move]) {
    let mut pos = start;
    for (i, m) in path.iter().enumerate() {
        let next = m.apply(&pos);
        let moved = (next.x - pos.x).abs() + (next.y - pos.y).abs();
        assert_eq!(moved, 1, "move {i} ({m:?}) is not a unit step");
        assert!(grid.is_open(next), "move {i} enters a wall at {next:?}");
        pos = next;
    }
    assert_eq!(pos, goal, "path does not end at the goal");
}

#[test]
fn demo_path_is_walkable_and_shortest() {
    let grid = TileGrid::demo().unwrap();
    let path = find_path(grid.clone(), DEMO_START, DEMO_GOAL).unwrap();
    assert!(!path.is_empty());
    assert_walkable(&grid, DEMO_START, DEMO_GOAL, &path);

    // Euclidean distance never overestimates unit 4-connected moves, so the
    // first path found is a shortest one.
    let shortest = bfs_distance(&grid, DEMO_START, DEMO_GOAL).unwrap();
    assert_eq!(path.len(), shortest);
}

#[test]
fn runner_report_matches_direct_search() {
    let world = GridWorld::demo().unwrap();
    let report = run_world(&world, &SearchPolicy::default()).unwrap();
    let direct = find_path(world.grid().clone(), DEMO_START, DEMO_GOAL).unwrap();
    assert_eq!(report.outcome, RunOutcome::Found);
    assert_eq!(report.path, direct);
    #[allow(clippy::cast_precision_loss)]
    let expected_cost = direct.len() as f64;
    assert_eq!(report.path_cost, Some(expected_cost));
}

#[test]
fn closure_driven_search_matches_world_search() {
    let grid = TileGrid::demo().unwrap();
    let actions: [fn(&Position) -> Position; 4] = [
        |p| Position::new(p.x - 1, p.y),
        |p| Position::new(p.x + 1, p.y),
        |p| Position::new(p.x, p.y - 1),
        |p| Position::new(p.x, p.y + 1),
    ];

    let mut state = SearchState::new(DEMO_START);
    while !advance(
        &mut state,
        |p| *p == DEMO_GOAL,
        &actions,
        |_, _| 1.0,
        |p| f64::from(DEMO_GOAL.x - p.x).hypot(f64::from(DEMO_GOAL.y - p.y)),
        |p, a| grid.is_open(a(p)),
    )
    .is_terminal()
    {}

    let direct = find_path(grid.clone(), DEMO_START, DEMO_GOAL).unwrap();
    assert_eq!(state.path().len(), direct.len());
    for (f, m) in state.path().iter().zip(&direct) {
        assert_eq!(f(&DEMO_START), m.apply(&DEMO_START));
    }
}

#[test]
fn render_marks_start_and_trail_but_not_goal() {
    let world = GridWorld::demo().unwrap();
    let report = run_world(&world, &SearchPolicy::default()).unwrap();
    let text = world.render(&report.path);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(format!("Path found ({} moves):", report.path.len()).as_str())
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 9);
    let marked = rows.iter().flat_map(|r| r.chars()).filter(|&c| c == '2').count();
    assert_eq!(marked, report.path.len());
    let at = |p: Position| rows[p.y as usize].as_bytes()[p.x as usize];
    assert_eq!(at(DEMO_START), b'2');
    assert_eq!(at(DEMO_GOAL), b'0');
}

#[test]
fn walled_off_goal_is_not_found() {
    let grid = TileGrid::parse(&["1111111", "1001001", "1001001", "1111111"]).unwrap();
    let world = GridWorld::new(grid, Position::new(1, 1), Position::new(5, 2)).unwrap();
    let report = run_world(&world, &SearchPolicy::default()).unwrap();
    assert_eq!(report.outcome, RunOutcome::Exhausted);
    assert_eq!(world.render(&report.path), "Path not found!\n");
    // Every reachable cell was settled once.
    assert_eq!(report.stats.steps, 4);
}

#[test]
fn blocked_start_is_rejected() {
    let grid = TileGrid::demo().unwrap();
    assert!(GridWorld::new(grid, Position::new(0, 0), DEMO_GOAL).is_err());
}
