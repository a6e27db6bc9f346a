use rand::Rng;

use crate::error::{GameError, Result};
use crate::geometry::Pos;
use crate::grid::{Grid, Tile, GRID_H};
use crate::solver::{door_distance, is_solvable};
use crate::terrain::{generate_raw, seal_dead_cells};

/// Where the player enters every room: left edge, vertical center.
pub const START: Pos = Pos::new(1, GRID_H / 2);

/// An accepted board: exactly one door, reachable from an empty start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    grid: Grid,
    start: Pos,
    door: Pos,
}

impl Room {
    /// Wraps a hand-built grid, or `None` if it has no single door reachable from `start`.
    ///
    /// The start cell is cleared before checking.
    pub fn new(mut grid: Grid, start: Pos) -> Option<Room> {
        if !start.is_in_bounds() || grid.count(Tile::Door) != 1 {
            return None;
        }
        grid[start] = Tile::Empty;
        let door = grid.door()?;
        if !is_solvable(&grid, start) {
            return None;
        }
        Some(Room { grid, start, door })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn door(&self) -> Pos {
        self.door
    }
}

/// Rolls terrain until the door is reachable from [`START`]. Never gives up.
pub fn generate_room(rng: &mut impl Rng) -> Room {
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.wrapping_add(1);
        if let Some(room) = attempt(rng) {
            accepted(&room, attempts);
            return room;
        }
    }
}

/// Like [`generate_room`], but fails after `max_attempts` rejected boards.
pub fn generate_room_within(rng: &mut impl Rng, max_attempts: u32) -> Result<Room> {
    for attempts in 1..=max_attempts {
        if let Some(room) = attempt(rng) {
            accepted(&room, attempts);
            return Ok(room);
        }
    }
    log::warn!("gave up on room generation after {max_attempts} attempts");
    Err(GameError::GenerationExhausted {
        attempts: max_attempts,
    })
}

fn attempt(rng: &mut impl Rng) -> Option<Room> {
    let mut grid = generate_raw(rng);
    seal_dead_cells(&mut grid);
    if !is_solvable(&grid, START) {
        log::debug!("rejected board, door unreachable");
        return None;
    }
    let door = grid.door()?;
    grid[START] = Tile::Empty;
    Some(Room {
        grid,
        start: START,
        door,
    })
}

fn accepted(room: &Room, attempts: u32) {
    log::debug!(
        "accepted room after {} attempt(s), door at {:?}, {} steps away",
        attempts,
        room.door,
        door_distance(&room.grid, room.start).unwrap_or_default()
    );
}
