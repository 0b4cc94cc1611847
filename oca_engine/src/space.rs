//! Space definitions.
//!
//! A space is any location the player can stand in. Spaces link to each other in
//! the four compass directions. Links are directed: a passage from A south to B
//! says nothing about a passage from B north to A.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::{HolderError, ObjectHolder};
use crate::{Entity, Id};

/// The four ways out of a space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}
impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Parse a direction word or its single-letter abbreviation.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: Id,
    pub name: String,
    pub north: Option<Id>,
    pub east: Option<Id>,
    pub south: Option<Id>,
    pub west: Option<Id>,
    pub illuminated: bool,
    objects: Vec<Id>,
    capacity: usize,
}
impl Entity for Space {
    fn id(&self) -> Id {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}
impl ObjectHolder for Space {
    fn add_object(&mut self, object_id: Id) -> Result<(), HolderError> {
        if self.objects.contains(&object_id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(HolderError::Full {
                capacity: self.capacity,
            });
        }
        self.objects.push(object_id);
        Ok(())
    }

    fn remove_object(&mut self, object_id: Id) -> bool {
        let before = self.objects.len();
        self.objects.retain(|id| *id != object_id);
        self.objects.len() != before
    }

    fn contains_object(&self, object_id: Id) -> bool {
        self.objects.contains(&object_id)
    }
}
impl Space {
    /// Create an unlit space with no exits that can hold up to `capacity` objects.
    pub fn new(id: Id, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id,
            name: name.into(),
            north: None,
            east: None,
            south: None,
            west: None,
            illuminated: false,
            objects: Vec::new(),
            capacity,
        }
    }

    /// The space reached by leaving in `direction`, if there is a link.
    pub fn neighbor(&self, direction: Direction) -> Option<Id> {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set_neighbor(&mut self, direction: Direction, to: Option<Id>) {
        match direction {
            Direction::North => self.north = to,
            Direction::East => self.east = to,
            Direction::South => self.south = to,
            Direction::West => self.west = to,
        }
    }

    /// Objects lying here, in the order they were put down.
    pub fn objects(&self) -> &[Id] {
        &self.objects
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.objects.len() >= self.capacity
    }
}
