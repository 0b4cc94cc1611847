//! Command module
//!
//! Describes possible commands used during gameplay and turns a line of player
//! input into one of them. Arguments (object names, look targets) are parsed
//! here, so handlers never read input themselves.
use std::fmt;

use thiserror::Error;
use variantly::Variantly;

use crate::space::Direction;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Drop(Option<String>),
    Exit,
    Look(LookTarget),
    MoveTo(Direction),
    Roll,
    Take(String),
    TurnOff,
    TurnOn,
    Unknown,
}
impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Unknown => CommandKind::Unknown,
            Command::Exit => CommandKind::Exit,
            Command::MoveTo(_) => CommandKind::Move,
            Command::Take(_) => CommandKind::Take,
            Command::Drop(_) => CommandKind::Drop,
            Command::Roll => CommandKind::Roll,
            Command::TurnOn => CommandKind::TurnOn,
            Command::TurnOff => CommandKind::TurnOff,
            Command::Look(_) => CommandKind::Look,
        }
    }
}

/// Which space a `look` is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookTarget {
    /// The player's own space.
    Here,
    /// The space to the south.
    Next,
    /// The space to the north.
    Back,
}
impl LookTarget {
    pub fn from_token(token: &str) -> Option<LookTarget> {
        match token {
            "here" | "h" => Some(LookTarget::Here),
            "next" | "n" => Some(LookTarget::Next),
            "back" | "b" => Some(LookTarget::Back),
            _ => None,
        }
    }

    /// Direction of the looked-at space relative to the player, `None` for here.
    pub fn direction(self) -> Option<Direction> {
        match self {
            LookTarget::Here => None,
            LookTarget::Next => Some(Direction::South),
            LookTarget::Back => Some(Direction::North),
        }
    }
}
impl fmt::Display for LookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookTarget::Here => "here",
            LookTarget::Next => "next",
            LookTarget::Back => "back",
        })
    }
}

/// Argument-free tag for a command, with the numeric codes of the classic
/// command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Unknown = 0,
    Exit = 1,
    Move = 2,
    Take = 3,
    Drop = 4,
    Roll = 5,
    TurnOn = 6,
    TurnOff = 7,
    Look = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no command has code {0}")]
pub struct UnknownCommandCode(pub i32);

impl CommandKind {
    pub const ALL: [CommandKind; 9] = [
        CommandKind::Unknown,
        CommandKind::Exit,
        CommandKind::Move,
        CommandKind::Take,
        CommandKind::Drop,
        CommandKind::Roll,
        CommandKind::TurnOn,
        CommandKind::TurnOff,
        CommandKind::Look,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            CommandKind::Unknown => "unknown",
            CommandKind::Exit => "exit",
            CommandKind::Move => "move",
            CommandKind::Take => "take",
            CommandKind::Drop => "drop",
            CommandKind::Roll => "roll",
            CommandKind::TurnOn => "turnon",
            CommandKind::TurnOff => "turnoff",
            CommandKind::Look => "look",
        }
    }
}
impl TryFrom<i32> for CommandKind {
    type Error = UnknownCommandCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(UnknownCommandCode(code))
    }
}
impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let lowered: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
    let words: Vec<&str> = lowered.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["exit" | "quit" | "q"] => Command::Exit,
        ["move" | "m" | "go", dir] => Direction::from_token(dir).map_or(Command::Unknown, Command::MoveTo),
        [dir @ ("north" | "east" | "south" | "west")] => {
            Direction::from_token(dir).map_or(Command::Unknown, Command::MoveTo)
        },
        ["next"] => Command::MoveTo(Direction::South),
        ["back"] => Command::MoveTo(Direction::North),
        ["left"] => Command::MoveTo(Direction::West),
        ["right"] => Command::MoveTo(Direction::East),
        ["take" | "t", name @ ..] if !name.is_empty() => Command::Take(name.join(" ")),
        ["drop" | "d"] => Command::Drop(None),
        ["drop" | "d", name @ ..] => Command::Drop(Some(name.join(" "))),
        ["roll" | "rl"] => Command::Roll,
        ["turnon" | "on"] | ["turn", "on"] => Command::TurnOn,
        ["turnoff" | "off"] | ["turn", "off"] => Command::TurnOff,
        ["look" | "l", target] => LookTarget::from_token(target).map_or(Command::Unknown, Command::Look),
        _ => Command::Unknown,
    }
}
