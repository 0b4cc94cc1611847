//! REPL and command log.
//!
//! The game runs in a read-eval-print loop: read a line, parse it into a
//! [`Command`](crate::Command), hand it to [`Game::update`], optionally record the outcome in
//! the command log, and show the resulting state.

mod input;

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::command::parse_command;
use crate::style::GameStyle;
use crate::view::describe_game;
use crate::{Game, Status, View, ViewItem};

use input::{InputEvent, InputManager};

pub const PROMPT: &str = "prompt:> ";

/// Control flow signal telling the loop whether to keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Appends one `<input> : OK|ERROR` line per executed command.
pub struct CommandLog<W: Write = BufWriter<File>> {
    out: W,
}

impl CommandLog {
    /// Open (or create) the log file at `path` for appending.
    ///
    /// # Errors
    /// - if the file cannot be opened
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening command log '{}'", path.display()))?;
        info!("logging commands to '{}'", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CommandLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one entry and flush it, so the log survives an abrupt exit.
    ///
    /// # Errors
    /// - if writing fails
    pub fn record(&mut self, input: &str, status: Status) -> io::Result<()> {
        writeln!(self.out, "{} : {status}", input.trim())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Run the main read-eval-print loop until the player exits or input ends.
///
/// # Errors
/// - if the command log cannot be written
pub fn run_repl(game: &mut Game, mut log: Option<CommandLog>) -> Result<()> {
    let mut view = View::new();
    let mut input = InputManager::new();
    let prompt = PROMPT.prompt_style().to_string();

    describe_game(game, &mut view);
    view.flush();

    loop {
        let line = match input.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            // end of input behaves like `exit`
            Ok(InputEvent::Eof) => "exit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                view.push(ViewItem::Error(format!("Failed to read input ({err}). Try again.")));
                view.flush();
                continue;
            },
        };

        let control = handle_line(game, &mut view, &line, log.as_mut())?;
        view.flush();
        if control == ReplControl::Quit {
            break;
        }
    }
    Ok(())
}

/// Execute one line of input and queue the resulting frame in `view`.
///
/// # Errors
/// - if the command log cannot be written
pub fn handle_line<W: Write>(
    game: &mut Game,
    view: &mut View,
    line: &str,
    log: Option<&mut CommandLog<W>>,
) -> Result<ReplControl> {
    let command = parse_command(line);
    let quitting = command.is_exit();
    let status = game.update(command);
    info!("\"{}\" -> {status}", line.trim());
    if let Some(log) = log {
        log.record(line, status).context("writing command log")?;
    }

    describe_game(game, view);
    if quitting || game.is_over() {
        view.push(ViewItem::EngineMessage("Goodbye.".to_string()));
        return Ok(ReplControl::Quit);
    }
    Ok(ReplControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Id, Space};

    fn corridor() -> Game {
        let mut game = Game::default();
        let mut a = Space::new(Id(1), "A", 4);
        a.south = Some(Id(2));
        a.illuminated = true;
        let mut b = Space::new(Id(2), "B", 4);
        b.north = Some(Id(1));
        game.add_space(a).unwrap();
        game.add_space(b).unwrap();
        game.player.location = Some(Id(1));
        game
    }

    #[test]
    fn lines_are_executed_and_logged() {
        let mut game = corridor();
        let mut view = View::with_width(80);
        let mut log = CommandLog::new(Vec::new());
        for line in ["move south", "move south", "look back", "dance"] {
            let control = handle_line(&mut game, &mut view, line, Some(&mut log)).unwrap();
            assert_eq!(control, ReplControl::Continue);
        }
        let written = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(
            written,
            "move south : OK\nmove south : ERROR\nlook back : OK\ndance : ERROR\n"
        );
        assert_eq!(game.player.location, Some(Id(2)));
    }

    #[test]
    fn exit_quits_and_is_logged_ok() {
        let mut game = corridor();
        let mut view = View::with_width(80);
        let mut log = CommandLog::new(Vec::new());
        let control = handle_line(&mut game, &mut view, "  quit ", Some(&mut log)).unwrap();
        assert_eq!(control, ReplControl::Quit);
        assert!(view.items.iter().any(|item| item.is_engine_message()));
        assert_eq!(String::from_utf8(log.into_inner()).unwrap(), "quit : OK\n");
    }

    #[test]
    fn log_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.log");
        for _ in 0..2 {
            let mut log = CommandLog::open(&path).unwrap();
            log.record("roll", Status::Ok).unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "roll : OK\nroll : OK\n");
    }

    #[test]
    fn works_without_a_log() {
        let mut game = corridor();
        let mut view = View::with_width(80);
        let control = handle_line::<Vec<u8>>(&mut game, &mut view, "roll", None).unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert!(game.die_last_value().is_some());
    }
}
