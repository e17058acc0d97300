//! `TileGrid`: 4-directional path finding on a wall/open tile level.
//!
//! Every move costs 1. The heuristic is the Euclidean distance to the goal,
//! which never overestimates the 4-directional distance, so paths are
//! shortest paths. A move is legal when it lands on an open cell inside the
//! level; rows may have different lengths.

use std::fmt::Write as _;

use wayfinder_search::{step, Action, Cost, SearchDomain, SearchState};

use crate::contract::{SearchWorld, WorldError};

/// A cell coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One of the four unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    /// All moves in expansion order.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl Action<Position> for Move {
    fn apply(&self, pos: &Position) -> Position {
        match self {
            Self::Left => Position::new(pos.x - 1, pos.y),
            Self::Right => Position::new(pos.x + 1, pos.y),
            Self::Up => Position::new(pos.x, pos.y - 1),
            Self::Down => Position::new(pos.x, pos.y + 1),
        }
    }
}

/// Level cell contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// A level: rows of tiles, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: Vec<Vec<Tile>>,
}

/// The demonstration level: 13 columns by 9 rows with interior walls.
pub const DEMO_LEVEL: [&str; 9] = [
    "1111111111111",
    "1001000000001",
    "1001010010001",
    "1011011000101",
    "1001001111101",
    "1001010000101",
    "1001000000101",
    "1000000000101",
    "1111111111111",
];

/// Start cell of the demonstration level.
pub const DEMO_START: Position = Position::new(1, 1);

/// Goal cell of the demonstration level.
pub const DEMO_GOAL: Position = Position::new(11, 7);

impl TileGrid {
    /// Parse a level from rows of `0` (open) and `1` (wall) characters.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLevel`] for an empty level or any other
    /// character.
    pub fn parse<R: AsRef<str>>(rows: &[R]) -> Result<Self, WorldError> {
        if rows.is_empty() {
            return Err(WorldError::InvalidLevel {
                row: 0,
                column: 0,
                detail: "level has no rows".into(),
            });
        }
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(column, c)| match c {
                        '0' => Ok(Tile::Open),
                        '1' => Ok(Tile::Wall),
                        other => Err(WorldError::InvalidLevel {
                            row,
                            column,
                            detail: format!("unexpected tile {other:?}"),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// The demonstration level.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in level; the `Result` mirrors [`TileGrid::parse`].
    pub fn demo() -> Result<Self, WorldError> {
        Self::parse(&DEMO_LEVEL)
    }

    /// Tile at `pos`, or `None` outside the level.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        let y = usize::try_from(pos.y).ok()?;
        let x = usize::try_from(pos.x).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Whether `pos` is an open cell inside the level.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.tile(pos) == Some(Tile::Open)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Render the level as digits, marking `marked` cells with `2`.
    #[must_use]
    pub fn render_marked(&self, marked: &[Position]) -> String {
        let mut out = String::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let here = marked.iter().any(|p| {
                    usize::try_from(p.x).ok() == Some(x) && usize::try_from(p.y).ok() == Some(y)
                });
                out.push(match (here, tile) {
                    (true, _) => '2',
                    (false, Tile::Open) => '0',
                    (false, Tile::Wall) => '1',
                });
            }
            out.push('\n');
        }
        out
    }
}

/// Path finding from `start` to `goal` on a [`TileGrid`].
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: TileGrid,
    start: Position,
    goal: Position,
}

impl GridWorld {
    /// # Errors
    ///
    /// Returns [`WorldError::BlockedEndpoint`] if `start` is not an open
    /// cell. An unreachable or walled goal is allowed; the search simply
    /// exhausts.
    pub fn new(grid: TileGrid, start: Position, goal: Position) -> Result<Self, WorldError> {
        if !grid.is_open(start) {
            return Err(WorldError::BlockedEndpoint {
                role: "start",
                x: start.x,
                y: start.y,
            });
        }
        Ok(Self { grid, start, goal })
    }

    /// The demonstration level from (1, 1) to (11, 7).
    ///
    /// # Errors
    ///
    /// Never fails for the built-in level.
    pub fn demo() -> Result<Self, WorldError> {
        Self::new(TileGrid::demo()?, DEMO_START, DEMO_GOAL)
    }

    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[must_use]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Cells visited along `path` before each move (the start and every
    /// intermediate cell; the final cell is not included).
    #[must_use]
    pub fn trail(&self, path: &[Move]) -> Vec<Position> {
        let mut pos = self.start;
        path.iter()
            .map(|m| {
                let here = pos;
                pos = m.apply(&pos);
                here
            })
            .collect()
    }
}

impl SearchDomain for GridWorld {
    type State = Position;
    type Action = Move;

    fn is_goal(&self, pos: &Position) -> bool {
        *pos == self.goal
    }

    fn actions(&self) -> &[Move] {
        &Move::ALL
    }

    fn g_cost(&self, _pos: &Position, _action: &Move) -> Cost {
        1.0
    }

    fn h_cost(&self, pos: &Position) -> Cost {
        let dx = f64::from(self.goal.x - pos.x);
        let dy = f64::from(self.goal.y - pos.y);
        dx.hypot(dy)
    }

    fn is_legal(&self, pos: &Position, action: &Move) -> bool {
        self.grid.is_open(action.apply(pos))
    }
}

impl SearchWorld for GridWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "tile_grid"
    }

    fn start(&self) -> Position {
        self.start
    }

    fn describe(&self) -> serde_json::Value {
        let level: Vec<String> = self
            .grid
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|t| if *t == Tile::Wall { '1' } else { '0' })
                    .collect()
            })
            .collect();
        serde_json::json!({
            "actions": Move::ALL.iter().map(|m| m.name()).collect::<Vec<_>>(),
            "goal": [self.goal.x, self.goal.y],
            "level": level,
            "start": [self.start.x, self.start.y],
        })
    }

    fn action_name(&self, action: &Move) -> String {
        action.name().to_string()
    }

    fn render_level(&self) -> Option<String> {
        Some(format!("Search level:\n{}", self.grid.render_marked(&[])))
    }

    fn render(&self, path: &[Move]) -> String {
        let mut out = String::new();
        if path.is_empty() && self.start != self.goal {
            out.push_str("Path not found!\n");
            return out;
        }
        let _ = writeln!(out, "Path found ({} moves):", path.len());
        out.push_str(&self.grid.render_marked(&self.trail(path)));
        out
    }
}

/// Find a shortest path on `grid` from `start` to `goal`.
///
/// Returns an empty vector when no path exists or `start == goal`.
///
/// # Errors
///
/// Returns [`WorldError::BlockedEndpoint`] if `start` is not open.
pub fn find_path(grid: TileGrid, start: Position, goal: Position) -> Result<Vec<Move>, WorldError> {
    let world = GridWorld::new(grid, start, goal)?;
    let mut state = SearchState::new(start);
    while !step(&mut state, &world).is_terminal() {}
    Ok(state.take_path())
}
