//! View module.
//!
//! Handlers never print. Each turn the REPL pushes what should be shown into a
//! [`View`], which groups the items by section, styles and wraps them, and
//! prints the whole frame at once.
pub mod view_item;

pub use view_item::*;

use std::fmt::Write;

use textwrap::{fill, termwidth};

use crate::id::to_raw;
use crate::style::GameStyle;
use crate::{Direction, Entity, Game, Location, Status};

/// View aggregates information to be displayed on each pass through the REPL
/// and then organizes and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create an empty view as wide as the terminal.
    pub fn new() -> Self {
        Self::with_width(termwidth())
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render every pending item, section by section, without printing.
    pub fn compose(&self) -> String {
        let mut out = String::new();
        for section in Section::ALL {
            let mut items = self.items.iter().filter(|item| item.section() == section).peekable();
            if items.peek().is_none() {
                continue;
            }
            let _ = writeln!(out, "{:.>width$}", section.title().section_style(), width = self.width);
            for item in items {
                let _ = writeln!(out, "{}", self.render(item));
            }
            out.push('\n');
        }
        out
    }

    /// Print the frame and clear it for the next turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        print!("{}", self.compose());
        self.items.clear();
    }

    fn render(&self, item: &ViewItem) -> String {
        match item {
            ViewItem::SpaceSummary(line) => self.space_line(line),
            ViewItem::ObjectLocation { name, location } => {
                format!("  {}: {location}", name.object_style())
            },
            ViewItem::PlayerStatus {
                name,
                location,
                carried,
            } => format!(
                "{} is in space {} carrying {}",
                name.player_style(),
                to_raw(*location),
                carried.as_ref().map_or_else(|| "nothing".to_string(), |c| c.object_style().to_string())
            ),
            ViewItem::DieValue(value) => match value {
                Some(value) => format!("Last die value: {value}"),
                None => "Last die value: none".to_string(),
            },
            ViewItem::CommandResult { command, status } => {
                let text = status.to_string();
                let styled = match status {
                    Status::Ok => text.ok_style(),
                    Status::Error => text.error_style(),
                };
                format!("Last command: {command} : {styled}")
            },
            ViewItem::Description(text) => fill(text, self.width).description_style().to_string(),
            ViewItem::Error(text) => fill(text, self.width).error_style().to_string(),
            ViewItem::EngineMessage(text) => fill(text, self.width),
        }
    }

    fn space_line(&self, line: &SpaceLine) -> String {
        let light = if line.illuminated {
            "lit".ok_style()
        } else {
            "dark".dark_style()
        };
        let links = Direction::ALL
            .iter()
            .zip(line.links)
            .map(|(direction, link)| format!("{direction} {}", to_raw(link)))
            .collect::<Vec<_>>()
            .join(", ");
        let objects = if line.objects.is_empty() {
            "none".to_string()
        } else {
            line.objects
                .iter()
                .map(|name| name.object_style().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let body = fill(&format!("links: {links}; objects: {objects}"), self.width.saturating_sub(4).max(20));
        format!(
            "{} ({}) [{light}]\n{}",
            line.name.space_style(),
            line.id,
            textwrap::indent(&body, "    ")
        )
    }
}

/// Push the full state dump and the outcome of the last command.
pub fn describe_game(game: &Game, view: &mut View) {
    for space in &game.spaces {
        view.push(ViewItem::SpaceSummary(SpaceLine {
            id: space.id(),
            name: space.name().to_string(),
            links: Direction::ALL.map(|direction| space.neighbor(direction)),
            illuminated: space.illuminated,
            objects: space
                .objects()
                .iter()
                .map(|id| game.object(*id).map_or_else(|| id.to_string(), |o| o.name().to_string()))
                .collect(),
        }));
    }
    for object in &game.objects {
        let location = match game.object_location(object.id()) {
            Location::Space(id) => format!("space {id}"),
            Location::Carried => format!("carried by {}", game.player.name),
            Location::Nowhere => "nowhere".to_string(),
        };
        view.push(ViewItem::ObjectLocation {
            name: object.name().to_string(),
            location,
        });
    }
    view.push(ViewItem::PlayerStatus {
        name: game.player.name.clone(),
        location: game.player.location,
        carried: game
            .player
            .carried()
            .and_then(|id| game.object(id))
            .map(|object| object.name().to_string()),
    });
    view.push(ViewItem::DieValue(game.die_last_value()));

    if let Some(kind) = game.last_command() {
        view.push(ViewItem::CommandResult {
            command: kind.to_string(),
            status: game.last_status(),
        });
    }
    if let Some(description) = game.description() {
        view.push(ViewItem::Description(description.to_string()));
    }
    if game.last_status() == Status::Error
        && let Some(err) = game.last_error()
    {
        view.push(ViewItem::Error(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Id, LookTarget, Object, ObjectHolder, Space};

    fn small_game() -> Game {
        let mut game = Game::default();
        let mut hall = Space::new(Id(1), "Hall", 4);
        hall.south = Some(Id(2));
        hall.illuminated = true;
        hall.add_object(Id(5)).unwrap();
        game.add_space(hall).unwrap();
        game.add_space(Space::new(Id(2), "Pit", 4)).unwrap();
        game.add_object(Object::new(Id(5), "lamp")).unwrap();
        game.add_object(Object::new(Id(6), "coin")).unwrap();
        game.player.location = Some(Id(1));
        game
    }

    fn plain(view: &View) -> String {
        colored::control::set_override(false);
        view.compose()
    }

    #[test]
    fn empty_view_composes_nothing() {
        assert_eq!(View::with_width(60).compose(), "");
    }

    #[test]
    fn state_dump_lists_spaces_objects_and_player() {
        let game = small_game();
        let mut view = View::with_width(80);
        describe_game(&game, &mut view);
        let out = plain(&view);
        assert!(out.contains("[scene]"));
        assert!(out.contains("Hall (1) [lit]"));
        assert!(out.contains("Pit (2) [dark]"));
        assert!(out.contains("south 2"));
        assert!(out.contains("north -1"));
        assert!(out.contains("lamp: space 1"));
        assert!(out.contains("coin: nowhere"));
        assert!(out.contains("The Player is in space 1 carrying nothing"));
        assert!(out.contains("Last die value: none"));
        assert!(!out.contains("[results]"));
    }

    #[test]
    fn results_show_command_status_and_description() {
        let mut game = small_game();
        game.update(Command::Look(LookTarget::Here));
        let mut view = View::with_width(80);
        describe_game(&game, &mut view);
        let out = plain(&view);
        assert!(out.contains("[results]"));
        assert!(out.contains("Last command: look : OK"));
        assert!(out.lines().any(|line| line == "Hall"));

        game.update(Command::Look(LookTarget::Back));
        let mut view = View::with_width(80);
        describe_game(&game, &mut view);
        let out = plain(&view);
        assert!(out.contains("Last command: look : ERROR"));
        assert!(out.contains("there is no space back to look at"));
    }

    #[test]
    fn sections_print_in_order() {
        let mut view = View::with_width(40);
        view.push(ViewItem::EngineMessage("Goodbye.".into()));
        view.push(ViewItem::Description("Hall".into()));
        view.push(ViewItem::DieValue(Some(3)));
        let out = plain(&view);
        let scene = out.find("[scene]").unwrap();
        let results = out.find("[results]").unwrap();
        let game = out.find("[game]").unwrap();
        assert!(scene < results && results < game);
        assert!(out.contains("Last die value: 3"));
    }
}
