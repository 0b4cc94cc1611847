//! Shared data model for Oca world files.

pub mod defs;
pub mod parse;
pub mod validate;

pub use defs::*;
pub use parse::{NumberPolicy, ParseError, parse_world};
pub use validate::{ValidationError, validate_world};
