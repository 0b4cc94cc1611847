//! ** id module **
//! Identifiers shared by spaces and objects.
//!
//! World files use plain integers with `-1` meaning "nothing". Inside the engine
//! an absent link is `Option<Id>::None`, so the sentinel only exists at the file
//! boundary.
use std::fmt;

use oca_data::{NO_ID, RawId};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(pub RawId);

impl Id {
    pub fn raw(self) -> RawId {
        self.0
    }
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        Id(raw)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Back to the world-file representation, where `None` is written as `-1`.
pub fn to_raw(id: Option<Id>) -> RawId {
    id.map_or(NO_ID, Id::raw)
}
