use serde::{Deserialize, Serialize};

/// Identifier as written in world files.
pub type RawId = i64;

/// Value used by world files to mean "no entity here".
pub const NO_ID: RawId = -1;

/// Maximum length (in bytes) of a space or object name.
pub const NAME_MAX: usize = 255;

/// Convert a raw identifier field into an optional link, mapping [`NO_ID`] to `None`.
pub fn link_from_raw(raw: RawId) -> Option<RawId> {
    if raw == NO_ID { None } else { Some(raw) }
}

/// Everything read from a world file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDef {
    #[serde(default)]
    pub spaces: Vec<SpaceDef>,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub player: Option<PlayerDef>,
}

/// A `#s:` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDef {
    pub id: RawId,
    pub name: String,
    pub north: Option<RawId>,
    pub east: Option<RawId>,
    pub south: Option<RawId>,
    pub west: Option<RawId>,
    #[serde(default)]
    pub illuminated: bool,
}
impl SpaceDef {
    /// Neighbour links paired with a label for each direction, in file order.
    pub fn links(&self) -> [(&'static str, Option<RawId>); 4] {
        [
            ("north", self.north),
            ("east", self.east),
            ("south", self.south),
            ("west", self.west),
        ]
    }
}

/// An `#o:` line. `location` is the space the object starts in, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
    pub id: RawId,
    pub name: String,
    pub location: Option<RawId>,
}

/// A `#p:` line. Without one the player starts in the first space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub start: Option<RawId>,
}
