use rand::Rng;

use crate::error::Result;
use crate::geometry::{Dir, Pos};
use crate::grid::{Grid, Tile};
use crate::room::{generate_room, generate_room_within, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Dir),
    Restart,
    Quit,
    None,
}

/// What a single command did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Idle,
    Moved,
    Blocked,
    Traversed,
    Restarted,
    Quit,
}

pub struct Game {
    room: Room,
    player: Pos,
    traversed: u32,
    max_attempts: Option<u32>,
}

impl Game {
    /// Starts in a fresh room. `max_attempts` caps generation for every room of the game.
    pub fn new(rng: &mut impl Rng, max_attempts: Option<u32>) -> Result<Self> {
        let room = fresh_room(rng, max_attempts)?;
        Ok(Self {
            player: room.start(),
            room,
            traversed: 0,
            max_attempts,
        })
    }

    /// Starts in a prepared room; later rooms are generated uncapped.
    pub fn from_room(room: Room) -> Self {
        Self {
            player: room.start(),
            room,
            traversed: 0,
            max_attempts: None,
        }
    }

    /// Caps generation for every later room.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn grid(&self) -> &Grid {
        self.room.grid()
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn traversed(&self) -> u32 {
        self.traversed
    }

    pub fn apply(&mut self, cmd: Command, rng: &mut impl Rng) -> Result<Step> {
        let step = match cmd {
            Command::Quit => Step::Quit,
            Command::None => Step::Idle,
            Command::Restart => {
                self.reset(rng)?;
                log::info!("room restarted");
                Step::Restarted
            }
            Command::Move(dir) => match self.target(dir) {
                None => Step::Blocked,
                Some(next) if self.grid()[next] == Tile::Door => {
                    self.reset(rng)?;
                    self.traversed += 1;
                    log::info!("door reached, rooms traversed: {}", self.traversed);
                    Step::Traversed
                }
                Some(next) => {
                    self.player = next;
                    log::trace!("moved {dir:?} to {next:?}");
                    Step::Moved
                }
            },
        };
        Ok(step)
    }

    /// The cell a move in `dir` would land on, if it is inside the grid and not a wall.
    fn target(&self, dir: Dir) -> Option<Pos> {
        self.player
            .neighbor(dir)
            .filter(|&next| self.grid()[next] != Tile::Wall)
    }

    /// Leaves room and player untouched when generation fails.
    fn reset(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.room = fresh_room(rng, self.max_attempts)?;
        self.player = self.room.start();
        Ok(())
    }
}

fn fresh_room(rng: &mut impl Rng, max_attempts: Option<u32>) -> Result<Room> {
    match max_attempts {
        Some(max) => generate_room_within(rng, max),
        None => Ok(generate_room(rng)),
    }
}
