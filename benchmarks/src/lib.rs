//! Shared helpers for wayfinder benchmark suites.
//!
//! A regime is a grid world shaped to stress one part of the engine:
//! open floors grow the frontier, serpentine corridors force long paths
//! with a misleading heuristic, and sealed goals exhaust the whole level.

use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::worlds::grid::{GridWorld, Move, Position, TileGrid};
use wayfinder_search::{search, RunOutcome, SearchPolicy, SearchState};

/// A named benchmark world.
pub struct Regime {
    pub name: &'static str,
    pub world: GridWorld,
}

/// `size` by `size` level with a wall border and an empty interior.
#[must_use]
pub fn open_level(size: usize) -> Vec<String> {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                        '1'
                    } else {
                        '0'
                    }
                })
                .collect()
        })
        .collect()
}

/// Like [`open_level`], with a wall on every fourth column that leaves a gap
/// alternately at the bottom and the top, so the only route snakes through
/// the whole level.
#[must_use]
pub fn serpentine_level(size: usize) -> Vec<String> {
    let mut rows: Vec<Vec<u8>> = open_level(size).into_iter().map(String::into_bytes).collect();
    for (i, x) in (4..size - 1).step_by(4).enumerate() {
        let gap = if i % 2 == 0 { size - 2 } else { 1 };
        for (y, row) in rows.iter_mut().enumerate().take(size - 1).skip(1) {
            if y != gap {
                row[x] = b'1';
            }
        }
    }
    rows.into_iter()
        .map(|r| String::from_utf8_lossy(&r).into_owned())
        .collect()
}

fn corner_to_corner(level: &[String]) -> GridWorld {
    let size = i32::try_from(level.len()).expect("benchmark level fits in i32");
    let grid = TileGrid::parse(level).expect("benchmark level parses");
    GridWorld::new(grid, Position::new(1, 1), Position::new(size - 2, size - 2))
        .expect("benchmark start is open")
}

/// The standard regimes at a given level size.
///
/// # Panics
///
/// Panics if `size` is too small to hold an interior (below 5).
#[must_use]
pub fn regimes(size: usize) -> Vec<Regime> {
    assert!(size >= 5, "regime levels need an interior");
    let mut sealed = open_level(size);
    // Wall off the goal corner.
    let mut row = sealed[size - 3].clone().into_bytes();
    row[size - 2] = b'1';
    sealed[size - 3] = String::from_utf8_lossy(&row).into_owned();
    let mut row = sealed[size - 2].clone().into_bytes();
    row[size - 3] = b'1';
    sealed[size - 2] = String::from_utf8_lossy(&row).into_owned();

    vec![
        Regime {
            name: "open_floor",
            world: corner_to_corner(&open_level(size)),
        },
        Regime {
            name: "serpentine",
            world: corner_to_corner(&serpentine_level(size)),
        },
        Regime {
            name: "sealed_goal",
            world: corner_to_corner(&sealed),
        },
    ]
}

/// Run `world` from its start to a terminal result.
///
/// # Panics
///
/// Panics if the policy is invalid. Benchmark runs are expected to succeed.
pub fn run_to_end(
    world: &GridWorld,
    policy: &SearchPolicy,
) -> (SearchState<Position, Move>, RunOutcome) {
    search(world.start(), world, policy).expect("search should succeed in benchmarks")
}
