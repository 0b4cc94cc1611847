//! `handlers::look` module
//!
//! Handlers for the light switch and for looking at the current or an adjacent
//! space. Looking only reveals a space's name, and only if it is lit.

use log::info;

use crate::command::LookTarget;
use crate::game::NOT_ILLUMINATED;
use crate::handlers::CommandError;
use crate::{Entity, Game};

/// Turns the light in the player's space on or off.
///
/// # Errors
/// - if the player has no location
pub fn switch_light_handler(game: &mut Game, on: bool) -> Result<(), CommandError> {
    let space = game.player_space_mut()?;
    space.illuminated = on;
    info!(
        "lights turned {} in {} ({})",
        if on { "on" } else { "off" },
        space.name(),
        space.id()
    );
    Ok(())
}

/// Describes the targeted space: its name when lit, a fixed notice when dark.
///
/// # Errors
/// - if the player has no location, or there is no space in that direction
///   (the description is left empty in both cases)
pub fn look_handler(game: &mut Game, target: LookTarget) -> Result<(), CommandError> {
    let here = game.player_space()?;
    let seen = match target.direction() {
        None => Some(here),
        Some(direction) => here.neighbor(direction).and_then(|id| game.space(id)),
    };
    let space = seen.ok_or(CommandError::NothingToSee(target))?;
    let description = if space.illuminated {
        space.name().to_string()
    } else {
        NOT_ILLUMINATED.to_string()
    };
    info!("{} looked {target}: {description}", game.player.name);
    game.set_description(description);
    Ok(())
}
