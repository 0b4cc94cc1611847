//! Terminal input for the REPL.
//!
//! Uses a `rustyline` editor with persistent history and command-word
//! completion when stdin is a terminal, and a plain line reader otherwise
//! (piped scripts, tests).

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Words offered by tab completion at the start of a line.
const COMMAND_WORDS: &[&str] = &[
    "back", "drop", "east", "exit", "go", "left", "look", "move", "next", "north", "off", "on", "quit", "right",
    "roll", "south", "take", "turn off", "turn on", "turnoff", "turnon", "west",
];

/// Words offered after `move`/`go`/`m`.
const DIRECTION_WORDS: &[&str] = &["east", "north", "south", "west"];

/// Words offered after `look`/`l`.
const LOOK_WORDS: &[&str] = &["back", "here", "next"];

type OcaEditor = rustyline::Editor<OcaHelper, DefaultHistory>;

#[derive(Default)]
struct OcaHelper;

impl Helper for OcaHelper {}
impl Hinter for OcaHelper {
    type Hint = String;
}
impl Highlighter for OcaHelper {}
impl Validator for OcaHelper {}

impl Completer for OcaHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_words(&line[..pos]))
    }
}

/// Completion candidates for the text before the cursor, with the offset the
/// replacement starts at.
fn complete_words(before: &str) -> (usize, Vec<Pair>) {
    let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
    let partial = before[start..].to_lowercase();
    let earlier: Vec<String> = before[..start].split_whitespace().map(str::to_lowercase).collect();
    let words: &[&str] = match earlier.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => COMMAND_WORDS,
        ["move" | "go" | "m"] => DIRECTION_WORDS,
        ["look" | "l"] => LOOK_WORDS,
        _ => &[],
    };
    if earlier.is_empty() && partial.is_empty() {
        return (start, Vec::new());
    }
    let pairs = words
        .iter()
        .filter(|word| word.starts_with(&partial))
        .map(|word| Pair {
            display: (*word).to_string(),
            replacement: (*word).to_string(),
        })
        .collect();
    (start, pairs)
}

/// Manages the interactive input backend, falling back to plain stdin when
/// the line editor is unavailable or fails.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match EditorInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Editor(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to plain stdin");
                    Backend::Plain
                },
            }
        } else {
            info!("stdin is not a TTY; using plain input mode");
            Backend::Plain
        };
        Self { backend }
    }

    /// Read a line. If the editor fails, switch to plain stdin and retry once.
    ///
    /// # Errors
    /// - if reading from stdin fails
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Err(err) if matches!(self.backend, Backend::Editor(_)) => {
                warn!("rustyline input failed: {err} -- switching to plain stdin");
                self.backend = Backend::Plain;
                self.backend.read_line(prompt)
            },
            other => other,
        }
    }
}

enum Backend {
    Editor(Box<EditorInput>),
    Plain,
}

impl Backend {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Editor(editor) => editor.read_line(prompt),
            Backend::Plain => {
                print!("{prompt}");
                io::stdout().flush()?;
                read_plain_line(&mut io::stdin().lock())
            },
        }
    }
}

struct EditorInput {
    editor: OcaEditor,
    history_path: Option<PathBuf>,
}

impl EditorInput {
    fn new() -> Result<Self, ReadlineError> {
        let mut editor = OcaEditor::new()?;
        editor.set_helper(Some(OcaHelper));
        let history_path = history_file_path();

        if let Some(path) = &history_path {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }
            match editor.load_history(path) {
                Ok(()) => info!("history loaded from {}", path.display()),
                Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                    info!("no prior history at {}, starting fresh", path.display());
                },
                Err(err) => warn!("failed to load history from {}: {err}", path.display()),
            }
        }
        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let line = match self.editor.readline(prompt) {
            Ok(line) => line,
            Err(err) => return convert_readline_error(err),
        };
        if !line.trim().is_empty() {
            if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                warn!("failed to append to history: {err}");
            }
            if let Some(path) = &self.history_path
                && let Err(err) = self.editor.save_history(path)
            {
                warn!("failed to save history to {}: {err}", path.display());
            }
        }
        Ok(InputEvent::Line(line))
    }
}

/// Read one line, stripping the line ending. End of input gives `Eof`.
fn read_plain_line(reader: &mut impl BufRead) -> io::Result<InputEvent> {
    let mut buffer = String::new();
    if reader.read_line(&mut buffer)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let line = buffer.trim_end_matches(['\n', '\r']);
    Ok(InputEvent::Line(line.to_string()))
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("oca_engine").join("history.txt")
}
