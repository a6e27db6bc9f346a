//! Terminal maze rooms.
//!
//! Each room is a random field of walls with a single door on the right edge.
//! Rooms are rejection-sampled until the door is reachable from the start cell,
//! and walking through the door rolls a fresh room.

pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod rng;
pub mod room;
pub mod session;
pub mod solver;
pub mod terminal;
pub mod terrain;

pub use error::{GameError, Result};
pub use game::{Command, Game, Step};
pub use geometry::{Dir, Pos};
pub use grid::{Grid, Tile, GRID_H, GRID_W};
pub use room::Room;
