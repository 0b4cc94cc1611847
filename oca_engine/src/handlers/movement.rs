//! `handlers::movement` module
//!
//! Contains the handler for commands that change player location

use log::info;

use crate::handlers::CommandError;
use crate::space::Direction;
use crate::{Entity, Game};

/// Move the player to the neighbouring space in `direction`.
///
/// # Errors
/// - if the player has no location, there is no link that way, or the link
///   points at a space that was never loaded
pub fn move_handler(game: &mut Game, direction: Direction) -> Result<(), CommandError> {
    let here = game.player_space()?;
    let from = here.id();
    let to = here.neighbor(direction).ok_or(CommandError::NoExit(direction))?;
    let destination = game.space(to).ok_or(CommandError::DanglingExit { direction, to })?;
    info!(
        "{} moved {direction} from space {from} to {} ({to})",
        game.player.name,
        destination.name()
    );
    game.player.location = Some(to);
    Ok(())
}
