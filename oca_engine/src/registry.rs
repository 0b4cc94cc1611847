//! Ordered, capacity-bounded collections of spaces and objects.
//!
//! Entries are only ever appended, so the collection is always packed and keeps
//! load order (the first space loaded is where the player starts by default).
//! Lookups scan from the front and return the first match; ids are not checked
//! for uniqueness here, so a later duplicate is simply shadowed. Duplicates are
//! reported by `oca_data::validate_world` at load time instead.

use thiserror::Error;

use crate::{Entity, Id};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{kind} registry is full ({capacity} entries)")]
    Full { kind: &'static str, capacity: usize },
}

#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: &'static str,
    entries: Vec<T>,
    capacity: usize,
}

impl<T: Entity> Registry<T> {
    /// `kind` names the entries in error messages ("space", "object").
    pub fn new(kind: &'static str, capacity: usize) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append an entry.
    ///
    /// # Errors
    /// - if the registry already holds `capacity` entries
    pub fn insert(&mut self, entry: T) -> Result<(), RegistryError> {
        if self.entries.len() >= self.capacity {
            return Err(RegistryError::Full {
                kind: self.kind,
                capacity: self.capacity,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Id of the entry at `index` in load order.
    pub fn id_at(&self, index: usize) -> Option<Id> {
        self.entries.get(index).map(Entity::id)
    }

    /// First entry whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|entry| same_name(entry.name(), name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a, T: Entity> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Case-insensitive name comparison used for everything the player types.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
