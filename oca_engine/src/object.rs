//! Object -- things that can be picked up and put down.
//!
//! An object has no location field of its own: it is wherever a holder says it
//! is. Spaces and the player both implement [`ObjectHolder`], and the handlers
//! keep the invariant that exactly one holder (or none) lists any given object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Entity, Id};

/// An item with identity and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub id: Id,
    pub name: String,
}
impl Object {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
impl Entity for Object {
    fn id(&self) -> Id {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// Reasons a holder refuses to accept an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolderError {
    #[error("no room for more objects here (capacity {capacity})")]
    Full { capacity: usize },
    #[error("already carrying object {0}")]
    Occupied(Id),
}

/// Methods common to anything that can hold objects.
pub trait ObjectHolder {
    /// Add an object. Adding one that is already held is a no-op.
    ///
    /// # Errors
    /// - if the holder has no room left
    fn add_object(&mut self, object_id: Id) -> Result<(), HolderError>;
    /// Remove an object, returning whether it was held.
    fn remove_object(&mut self, object_id: Id) -> bool;
    fn contains_object(&self, object_id: Id) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_exposes_entity_fields() {
        let object = Object::new(Id(3), "lantern");
        assert_eq!(object.id(), Id(3));
        assert_eq!(object.name(), "lantern");
    }

    #[test]
    fn holder_errors_read_well() {
        assert_eq!(
            HolderError::Full { capacity: 2 }.to_string(),
            "no room for more objects here (capacity 2)"
        );
        assert_eq!(HolderError::Occupied(Id(9)).to_string(), "already carrying object 9");
    }
}
