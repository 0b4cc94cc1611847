//! Data structures representing the running game.
//!
//! This module defines [`Game`], which owns every space and object, the player
//! and the die, and the [`Game::update`] entry point that executes one command.

use std::fmt;

use log::info;
use variantly::Variantly;

use crate::command::{Command, CommandKind};
use crate::config::Limits;
use crate::handlers::{
    CommandError, drop_handler, look_handler, move_handler, roll_handler, switch_light_handler, take_handler,
};
use crate::registry::{Registry, RegistryError};
use crate::{Die, Id, Object, Player, Space};

/// Text shown by `look` when the target space is dark.
pub const NOT_ILLUMINATED: &str = "Space is not illuminated";

/// Kinds of places where an object may be.
#[derive(Copy, Debug, Default, Clone, Variantly, PartialEq, Eq)]
pub enum Location {
    Space(Id),
    Carried,
    #[default]
    Nowhere,
}

/// Methods common to anything stored in a [`Registry`].
pub trait Entity {
    fn id(&self) -> Id;
    fn name(&self) -> &str;
}

/// Outcome of the last command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ok,
    Error,
}
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Ok => "OK",
            Status::Error => "ERROR",
        })
    }
}

/// Complete state of the running game.
///
/// `Game` is built by the loader and then mutated one command at a time through
/// [`Game::update`]. Besides the world itself it remembers what the last command
/// was, whether it worked, why it failed, and what the player saw.
#[derive(Debug, Clone)]
pub struct Game {
    pub spaces: Registry<Space>,
    pub objects: Registry<Object>,
    pub player: Player,
    pub die: Die,
    last_command: Option<CommandKind>,
    last_status: Status,
    last_error: Option<CommandError>,
    description: Option<String>,
}
impl Default for Game {
    fn default() -> Self {
        Self::new(&Limits::default(), Die::default())
    }
}
impl Game {
    /// Create a game with no spaces or objects.
    pub fn new(limits: &Limits, die: Die) -> Game {
        Self {
            spaces: Registry::new("space", limits.max_spaces),
            objects: Registry::new("object", limits.max_objects),
            player: Player::default(),
            die,
            last_command: None,
            last_status: Status::Ok,
            last_error: None,
            description: None,
        }
    }

    /// Register a space.
    /// # Errors
    /// - if the space registry is full
    pub fn add_space(&mut self, space: Space) -> Result<(), RegistryError> {
        self.spaces.insert(space)
    }

    /// Register an object. It is not placed anywhere until a holder takes it.
    /// # Errors
    /// - if the object registry is full
    pub fn add_object(&mut self, object: Object) -> Result<(), RegistryError> {
        self.objects.insert(object)
    }

    pub fn space(&self, id: Id) -> Option<&Space> {
        self.spaces.get(id)
    }

    pub fn space_mut(&mut self, id: Id) -> Option<&mut Space> {
        self.spaces.get_mut(id)
    }

    /// Id of the `index`-th space loaded.
    pub fn space_id_at(&self, index: usize) -> Option<Id> {
        self.spaces.id_at(index)
    }

    pub fn object(&self, id: Id) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn object_by_name(&self, name: &str) -> Option<&Object> {
        self.objects.find_by_name(name)
    }

    /// Obtain a reference to the space the player occupies.
    /// # Errors
    /// - if the player has no location, or it does not resolve to a space
    pub fn player_space(&self) -> Result<&Space, CommandError> {
        let id = self.player.location.ok_or(CommandError::NoLocation)?;
        self.spaces.get(id).ok_or(CommandError::UnknownSpace(id))
    }

    /// Obtain a mutable reference to the space the player occupies.
    /// # Errors
    /// - if the player has no location, or it does not resolve to a space
    pub fn player_space_mut(&mut self) -> Result<&mut Space, CommandError> {
        let id = self.player.location.ok_or(CommandError::NoLocation)?;
        self.spaces.get_mut(id).ok_or(CommandError::UnknownSpace(id))
    }

    /// Where an object currently is.
    pub fn object_location(&self, object_id: Id) -> Location {
        if self.player.carried() == Some(object_id) {
            return Location::Carried;
        }
        self.spaces
            .iter()
            .find(|space| space.objects().contains(&object_id))
            .map_or(Location::Nowhere, |space| Location::Space(space.id))
    }

    /// Execute one command and record its outcome.
    ///
    /// The previous description and failure reason are cleared first, so after
    /// this returns they describe only `command`.
    pub fn update(&mut self, command: Command) -> Status {
        self.description = None;
        self.last_error = None;
        let kind = command.kind();
        self.last_command = Some(kind);

        let result = match command {
            Command::Unknown => Err(CommandError::Unrecognized),
            Command::Exit => Ok(()),
            Command::MoveTo(direction) => move_handler(self, direction),
            Command::Take(name) => take_handler(self, &name),
            Command::Drop(name) => drop_handler(self, name.as_deref()),
            Command::Roll => roll_handler(self),
            Command::TurnOn => switch_light_handler(self, true),
            Command::TurnOff => switch_light_handler(self, false),
            Command::Look(target) => look_handler(self, target),
        };

        self.last_status = match result {
            Ok(()) => Status::Ok,
            Err(err) => {
                info!("{kind} failed: {err}");
                self.last_error = Some(err);
                Status::Error
            },
        };
        self.last_status
    }

    pub fn last_command(&self) -> Option<CommandKind> {
        self.last_command
    }

    pub fn last_status(&self) -> Status {
        self.last_status
    }

    /// Why the last command failed, if it did.
    pub fn last_error(&self) -> Option<&CommandError> {
        self.last_error.as_ref()
    }

    /// What the last command showed the player (a look result or a die roll).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn set_description(&mut self, text: impl Into<String>) {
        self.description = Some(text.into());
    }

    pub fn die_last_value(&self) -> Option<u32> {
        self.die.last()
    }

    /// There is no winning or losing yet; the game runs until the player exits.
    pub fn is_over(&self) -> bool {
        false
    }
}
