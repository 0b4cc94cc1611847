//! `handlers::dice` module

use log::info;

use crate::Game;
use crate::handlers::CommandError;

/// Rolls the game's die and reports the value.
///
/// # Errors
/// Never fails; the signature matches the other handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn roll_handler(game: &mut Game) -> Result<(), CommandError> {
    let value = game.die.roll();
    info!("{} rolled a {value}", game.player.name);
    game.set_description(format!("You rolled a {value}."));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::{Command, Die, Status};

    #[test]
    fn roll_records_value_within_bounds() {
        let mut game = Game::new(&Limits::default(), Die::seeded(2, 4, 11).unwrap());
        for _ in 0..100 {
            assert_eq!(game.update(Command::Roll), Status::Ok);
            let value = game.die_last_value().unwrap();
            assert!((2..=4).contains(&value));
            assert_eq!(game.description(), Some(format!("You rolled a {value}.").as_str()));
        }
    }

    #[test]
    fn roll_works_without_a_location() {
        let mut game = Game::default();
        assert!(game.player.location.is_none());
        roll_handler(&mut game).unwrap();
        assert!(game.die_last_value().is_some());
    }
}
