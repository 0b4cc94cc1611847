//! `handlers::inventory` module
//!
//! Contains handlers for commands that move the carried object between the
//! player and the current space.

use log::info;

use crate::handlers::CommandError;
use crate::object::{HolderError, ObjectHolder};
use crate::registry::same_name;
use crate::{Entity, Game, Location};

/// Removes an object from the current space and puts it in the player's hands.
///
/// # Errors
/// - if the player already carries something (checked before anything else)
/// - if no object has that name, or it is not in the player's space
pub fn take_handler(game: &mut Game, name: &str) -> Result<(), CommandError> {
    if let Some(held) = game.player.carried() {
        return Err(HolderError::Occupied(held).into());
    }
    let object_id = game
        .object_by_name(name)
        .map(Entity::id)
        .ok_or_else(|| CommandError::NoSuchObject(name.to_string()))?;
    let here = game.player_space()?.id();
    if game.object_location(object_id) != Location::Space(here) {
        return Err(CommandError::NotHere(name.to_string()));
    }

    game.player.add_object(object_id)?;
    let space = game.player_space_mut()?;
    space.remove_object(object_id);
    info!(
        "{} took object {object_id} ({name}) from {} ({here})",
        game.player.name,
        game.space(here).map_or("?", Entity::name)
    );
    Ok(())
}

/// Puts the carried object down in the current space.
///
/// `name`, when given, must match the carried object.
///
/// # Errors
/// - if the player carries nothing or something else
/// - if the player has no location or the space is full
pub fn drop_handler(game: &mut Game, name: Option<&str>) -> Result<(), CommandError> {
    let object_id = game.player.carried().ok_or(CommandError::NothingCarried)?;
    if let Some(name) = name
        && !game.object(object_id).is_some_and(|object| same_name(object.name(), name))
    {
        return Err(CommandError::NotCarrying(name.to_string()));
    }

    let space = game.player_space_mut()?;
    space.add_object(object_id)?;
    let (space_id, space_name) = (space.id(), space.name().to_string());
    game.player.remove_object(object_id);
    info!(
        "{} dropped object {object_id} in {space_name} ({space_id})",
        game.player.name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::{Die, Id, Object, Space};

    fn game_with_objects() -> Game {
        let limits = Limits {
            max_objects_per_space: 2,
            ..Limits::default()
        };
        let mut game = Game::new(&limits, Die::default());
        let mut hall = Space::new(Id(1), "Hall", limits.max_objects_per_space);
        hall.add_object(Id(10)).unwrap();
        hall.add_object(Id(11)).unwrap();
        let mut attic = Space::new(Id(2), "Attic", limits.max_objects_per_space);
        attic.add_object(Id(12)).unwrap();
        game.add_space(hall).unwrap();
        game.add_space(attic).unwrap();
        game.add_object(Object::new(Id(10), "lamp")).unwrap();
        game.add_object(Object::new(Id(11), "Rusty Key")).unwrap();
        game.add_object(Object::new(Id(12), "map")).unwrap();
        game.add_object(Object::new(Id(13), "ghost")).unwrap();
        game.player.location = Some(Id(1));
        game
    }

    #[test]
    fn take_moves_object_from_space_to_player() {
        let mut game = game_with_objects();
        take_handler(&mut game, "rusty key").unwrap();
        assert_eq!(game.player.carried(), Some(Id(11)));
        assert_eq!(game.space(Id(1)).unwrap().objects(), &[Id(10)]);
        assert_eq!(game.object_location(Id(11)), Location::Carried);
    }

    #[test]
    fn take_fails_when_hands_are_full_whatever_the_target() {
        let mut game = game_with_objects();
        take_handler(&mut game, "lamp").unwrap();
        for target in ["rusty key", "map", "nonsense"] {
            assert_eq!(
                take_handler(&mut game, target),
                Err(CommandError::Holder(HolderError::Occupied(Id(10))))
            );
        }
        assert_eq!(game.space(Id(1)).unwrap().objects(), &[Id(11)]);
    }

    #[test]
    fn take_rejects_unknown_and_distant_objects() {
        let mut game = game_with_objects();
        assert_eq!(
            take_handler(&mut game, "sword"),
            Err(CommandError::NoSuchObject("sword".into()))
        );
        assert_eq!(take_handler(&mut game, "map"), Err(CommandError::NotHere("map".into())));
        // registered but lying nowhere
        assert_eq!(take_handler(&mut game, "ghost"), Err(CommandError::NotHere("ghost".into())));
        assert!(game.player.is_empty_handed());
        assert_eq!(game.space(Id(2)).unwrap().objects(), &[Id(12)]);
    }

    #[test]
    fn take_without_location_fails() {
        let mut game = game_with_objects();
        game.player.location = None;
        assert_eq!(take_handler(&mut game, "lamp"), Err(CommandError::NoLocation));
        assert!(game.player.is_empty_handed());
    }

    #[test]
    fn take_then_drop_returns_object_to_its_space() {
        let mut game = game_with_objects();
        take_handler(&mut game, "lamp").unwrap();
        drop_handler(&mut game, None).unwrap();
        assert!(game.player.is_empty_handed());
        assert_eq!(game.object_location(Id(10)), Location::Space(Id(1)));
    }

    #[test]
    fn drop_with_empty_hands_fails() {
        let mut game = game_with_objects();
        assert_eq!(drop_handler(&mut game, None), Err(CommandError::NothingCarried));
        assert_eq!(drop_handler(&mut game, Some("lamp")), Err(CommandError::NothingCarried));
    }

    #[test]
    fn drop_by_name_must_match_carried_object() {
        let mut game = game_with_objects();
        take_handler(&mut game, "lamp").unwrap();
        assert_eq!(
            drop_handler(&mut game, Some("map")),
            Err(CommandError::NotCarrying("map".into()))
        );
        assert_eq!(game.player.carried(), Some(Id(10)));
        drop_handler(&mut game, Some("LAMP")).unwrap();
        assert!(game.player.is_empty_handed());
    }

    #[test]
    fn drop_into_full_space_keeps_object_in_hand() {
        let mut game = game_with_objects();
        take_handler(&mut game, "lamp").unwrap();
        // refill the hall to capacity behind the player's back
        game.space_mut(Id(1)).unwrap().add_object(Id(13)).unwrap();
        assert_eq!(
            drop_handler(&mut game, None),
            Err(CommandError::Holder(HolderError::Full { capacity: 2 }))
        );
        assert_eq!(game.player.carried(), Some(Id(10)));
        assert!(!game.space(Id(1)).unwrap().contains_object(Id(10)));
    }
}
