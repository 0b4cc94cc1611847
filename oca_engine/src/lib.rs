#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const OCA_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod die;
pub mod game;
pub mod handlers;
pub mod id;
pub mod loader;
pub mod object;
pub mod player;
pub mod registry;
pub mod repl;
pub mod space;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use command::{Command, CommandKind, LookTarget, parse_command};
pub use config::EngineConfig;
pub use die::Die;
pub use game::{Entity, Game, Location, Status};
pub use handlers::CommandError;
pub use id::Id;
pub use loader::load_game;
pub use object::{Object, ObjectHolder};
pub use player::Player;
pub use registry::Registry;
pub use repl::run_repl;
pub use space::{Direction, Space};
pub use view::{View, ViewItem};
