//! `ViewItem` module
//!
//! A `ViewItem` is one piece of information sent to the [`View`](crate::View)
//! during a turn. The view sorts them into sections, styles them and prints
//! them when the turn is flushed.

use variantly::Variantly;

use crate::{Id, Status};

/// One line of the space dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceLine {
    pub id: Id,
    pub name: String,
    /// North, east, south and west links, in that order.
    pub links: [Option<Id>; 4],
    pub illuminated: bool,
    /// Names of the objects lying in the space.
    pub objects: Vec<String>,
}

/// The kinds of information that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    SpaceSummary(SpaceLine),
    ObjectLocation {
        name: String,
        location: String,
    },
    PlayerStatus {
        name: String,
        location: Option<Id>,
        carried: Option<String>,
    },
    DieValue(Option<u32>),
    CommandResult {
        command: String,
        status: Status,
    },
    Description(String),
    Error(String),
    EngineMessage(String),
}

/// Top-level output sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Scene,
    Results,
    Game,
}
impl Section {
    pub const ALL: [Section; 3] = [Section::Scene, Section::Results, Section::Game];

    pub fn title(self) -> &'static str {
        match self {
            Section::Scene => "scene",
            Section::Results => "results",
            Section::Game => "game",
        }
    }
}

impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::SpaceSummary(_)
            | ViewItem::ObjectLocation { .. }
            | ViewItem::PlayerStatus { .. }
            | ViewItem::DieValue(_) => Section::Scene,
            ViewItem::CommandResult { .. } | ViewItem::Description(_) | ViewItem::Error(_) => Section::Results,
            ViewItem::EngineMessage(_) => Section::Game,
        }
    }
}
