//! Command handlers.
//!
//! Each handler takes the game plus the arguments already parsed from the
//! player's input, applies the command, and returns `Err` with the reason when
//! the command cannot be carried out. A handler that fails leaves the game
//! exactly as it found it; [`crate::Game::update`] turns the result into the
//! recorded [`crate::Status`].

pub mod dice;
pub mod inventory;
pub mod look;
pub mod movement;

pub use dice::*;
pub use inventory::*;
pub use look::*;
pub use movement::*;

use thiserror::Error;

use crate::command::LookTarget;
use crate::object::HolderError;
use crate::space::Direction;
use crate::Id;

/// Why a command could not be executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("that command is not recognized")]
    Unrecognized,
    #[error("the player is not in any space")]
    NoLocation,
    #[error("space {0} does not exist")]
    UnknownSpace(Id),
    #[error("there is no way {0} from here")]
    NoExit(Direction),
    #[error("the {direction} exit leads to space {to}, which does not exist")]
    DanglingExit { direction: Direction, to: Id },
    #[error("there is no object called '{0}'")]
    NoSuchObject(String),
    #[error("the {0} is not here")]
    NotHere(String),
    #[error("not carrying anything")]
    NothingCarried,
    #[error("not carrying anything called '{0}'")]
    NotCarrying(String),
    #[error("there is no space {0} to look at")]
    NothingToSee(LookTarget),
    #[error(transparent)]
    Holder(#[from] HolderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(CommandError::NoExit(Direction::East).to_string(), "there is no way east from here");
        assert_eq!(
            CommandError::NothingToSee(LookTarget::Back).to_string(),
            "there is no space back to look at"
        );
        assert_eq!(
            CommandError::from(HolderError::Occupied(Id(4))).to_string(),
            "already carrying object 4"
        );
    }
}
