//! Player -- the single actor moving through the world
use serde::{Deserialize, Serialize};

use crate::Id;
use crate::object::{HolderError, ObjectHolder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub location: Option<Id>,
    carried: Option<Id>,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            name: "The Player".into(),
            location: None,
            carried: None,
        }
    }
}
impl Player {
    pub fn new(name: impl Into<String>, location: Option<Id>) -> Self {
        Self {
            name: name.into(),
            location,
            carried: None,
        }
    }

    /// The object in the player's hands, if any.
    pub fn carried(&self) -> Option<Id> {
        self.carried
    }

    pub fn is_empty_handed(&self) -> bool {
        self.carried.is_none()
    }
}
impl ObjectHolder for Player {
    fn add_object(&mut self, object_id: Id) -> Result<(), HolderError> {
        match self.carried {
            Some(held) if held != object_id => Err(HolderError::Occupied(held)),
            _ => {
                self.carried = Some(object_id);
                Ok(())
            },
        }
    }

    fn remove_object(&mut self, object_id: Id) -> bool {
        if self.carried == Some(object_id) {
            self.carried = None;
            true
        } else {
            false
        }
    }

    fn contains_object(&self, object_id: Id) -> bool {
        self.carried == Some(object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_player_is_nowhere_and_empty_handed() {
        let player = Player::default();
        assert_eq!(player.location, None);
        assert!(player.is_empty_handed());
    }

    #[test]
    fn player_carries_at_most_one_object() {
        let mut player = Player::new("Ana", Some(Id(1)));
        player.add_object(Id(10)).unwrap();
        assert_eq!(player.add_object(Id(11)), Err(HolderError::Occupied(Id(10))));
        assert_eq!(player.carried(), Some(Id(10)));
        // picking up the same thing again changes nothing
        assert!(player.add_object(Id(10)).is_ok());
    }

    #[test]
    fn removing_other_objects_is_ignored() {
        let mut player = Player::new("Ana", None);
        player.add_object(Id(10)).unwrap();
        assert!(!player.remove_object(Id(11)));
        assert!(player.contains_object(Id(10)));
        assert!(player.remove_object(Id(10)));
        assert!(player.is_empty_handed());
    }
}
