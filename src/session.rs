use rand::Rng;

use crate::error::Result;
use crate::game::{Game, Step};
use crate::input::CommandSource;
use crate::render::Screen;

/// Draws the current room, then handles one command at a time until the player quits.
pub fn play(
    game: &mut Game,
    rng: &mut impl Rng,
    source: &mut impl CommandSource,
    screen: &mut impl Screen,
) -> Result<()> {
    screen.draw(game)?;
    loop {
        let cmd = source.next_command()?;
        match game.apply(cmd, rng)? {
            Step::Quit => {
                log::info!("quit after {} rooms", game.traversed());
                return Ok(());
            }
            Step::Blocked => log::trace!("{cmd:?} blocked at {:?}", game.player()),
            _ => {}
        }
        screen.draw(game)?;
    }
}
