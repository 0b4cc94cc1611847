//! Reader for the line-oriented world file format.
//!
//! ```text
//! #s:id|name|north|east|south|west|illuminated|
//! #o:id|name|space|
//! #p:name|space|
//! ```
//!
//! Lines that do not start with one of the markers are ignored, so comments and
//! blank lines need no special syntax. `-1` in an id field means "no entity".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defs::{NAME_MAX, ObjectDef, PlayerDef, RawId, SpaceDef, WorldDef, link_from_raw};

pub const SPACE_MARKER: &str = "#s:";
pub const OBJECT_MARKER: &str = "#o:";
pub const PLAYER_MARKER: &str = "#p:";

/// How malformed numeric fields are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Read the leading integer of the field, or 0 if there is none.
    #[default]
    Lenient,
    /// Reject any field that is not a complete integer.
    Strict,
}

/// Failure to read a world file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingField { line: usize, field: &'static str },
    InvalidNumber { line: usize, field: &'static str, value: String },
    NameTooLong { line: usize, len: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingField { line, field } => {
                write!(f, "line {line}: missing field '{field}'")
            },
            ParseError::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: field '{field}' is not a number ({value:?})")
            },
            ParseError::NameTooLong { line, len } => {
                write!(f, "line {line}: name is {len} bytes long (max {NAME_MAX})")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse the full text of a world file.
///
/// # Errors
/// Returns the first [`ParseError`] encountered. Under [`NumberPolicy::Lenient`]
/// only missing fields are errors; strict parsing also rejects bad numbers and
/// over-long names.
///
/// ```
/// use oca_data::{NumberPolicy, parse_world};
///
/// let text = "#s:1|Entrance|-1|-1|2|-1|1|\n#s:2|Cellar|1|-1|-1|-1|0|\n";
/// let world = parse_world(text, NumberPolicy::Lenient).unwrap();
/// assert_eq!(world.spaces.len(), 2);
/// assert_eq!(world.spaces[0].south, Some(2));
/// assert!(!world.spaces[1].illuminated);
/// ```
pub fn parse_world(text: &str, policy: NumberPolicy) -> Result<WorldDef, ParseError> {
    let mut world = WorldDef::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim_end_matches('\r');
        if let Some(body) = line.strip_prefix(SPACE_MARKER) {
            world.spaces.push(parse_space(body, line_no, policy)?);
        } else if let Some(body) = line.strip_prefix(OBJECT_MARKER) {
            world.objects.push(parse_object(body, line_no, policy)?);
        } else if let Some(body) = line.strip_prefix(PLAYER_MARKER) {
            world.player = Some(parse_player(body, line_no, policy)?);
        }
    }

    Ok(world)
}

/// Sequential access to the `|`-separated fields of one line.
struct Fields<'a> {
    parts: std::str::Split<'a, char>,
    line: usize,
    policy: NumberPolicy,
}

impl<'a> Fields<'a> {
    fn new(body: &'a str, line: usize, policy: NumberPolicy) -> Self {
        Self {
            parts: body.split('|'),
            line,
            policy,
        }
    }

    fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.parts.next().ok_or(ParseError::MissingField { line: self.line, field })
    }

    fn name(&mut self, field: &'static str) -> Result<String, ParseError> {
        let name = self.text(field)?.trim();
        if name.len() <= NAME_MAX {
            return Ok(name.to_string());
        }
        match self.policy {
            NumberPolicy::Strict => Err(ParseError::NameTooLong {
                line: self.line,
                len: name.len(),
            }),
            NumberPolicy::Lenient => {
                let mut end = NAME_MAX;
                while !name.is_char_boundary(end) {
                    end -= 1;
                }
                Ok(name[..end].to_string())
            },
        }
    }

    fn number(&mut self, field: &'static str) -> Result<RawId, ParseError> {
        let value = self.text(field)?;
        match self.policy {
            NumberPolicy::Lenient => Ok(leading_integer(value)),
            NumberPolicy::Strict => value.trim().parse().map_err(|_| ParseError::InvalidNumber {
                line: self.line,
                field,
                value: value.to_string(),
            }),
        }
    }

    fn link(&mut self, field: &'static str) -> Result<Option<RawId>, ParseError> {
        self.number(field).map(link_from_raw)
    }
}

fn parse_space(body: &str, line: usize, policy: NumberPolicy) -> Result<SpaceDef, ParseError> {
    let mut fields = Fields::new(body, line, policy);
    Ok(SpaceDef {
        id: fields.number("id")?,
        name: fields.name("name")?,
        north: fields.link("north")?,
        east: fields.link("east")?,
        south: fields.link("south")?,
        west: fields.link("west")?,
        illuminated: fields.number("illuminated")? != 0,
    })
}

fn parse_object(body: &str, line: usize, policy: NumberPolicy) -> Result<ObjectDef, ParseError> {
    let mut fields = Fields::new(body, line, policy);
    Ok(ObjectDef {
        id: fields.number("id")?,
        name: fields.name("name")?,
        location: fields.link("location")?,
    })
}

fn parse_player(body: &str, line: usize, policy: NumberPolicy) -> Result<PlayerDef, ParseError> {
    let mut fields = Fields::new(body, line, policy);
    Ok(PlayerDef {
        name: fields.name("name")?,
        start: fields.link("start")?,
    })
}

/// C `atol` semantics: skip leading whitespace, read an optional sign and as many
/// digits as follow. Anything unreadable (or out of range) is 0.
fn leading_integer(field: &str) -> RawId {
    let trimmed = field.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end]
        .parse::<RawId>()
        .map_or(0, |value| if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROOMS: &str = "\
// a tiny world
#s:1|Entrance|-1|-1|2|-1|1|
#s:2|Cellar|1|-1|-1|-1|0|
#o:10|lamp|1|
#o:11|key|-1|
#p:Ana|2|
";

    #[test]
    fn reads_spaces_objects_and_player() {
        let world = parse_world(TWO_ROOMS, NumberPolicy::Strict).unwrap();
        assert_eq!(world.spaces.len(), 2);
        assert_eq!(world.spaces[0].name, "Entrance");
        assert_eq!(world.spaces[0].north, None);
        assert_eq!(world.spaces[0].south, Some(2));
        assert!(world.spaces[0].illuminated);
        assert_eq!(world.spaces[1].north, Some(1));
        assert!(!world.spaces[1].illuminated);

        assert_eq!(world.objects.len(), 2);
        assert_eq!(world.objects[0].location, Some(1));
        assert_eq!(world.objects[1].location, None);

        let player = world.player.unwrap();
        assert_eq!(player.name, "Ana");
        assert_eq!(player.start, Some(2));
    }

    #[test]
    fn unmarked_lines_are_ignored() {
        let world = parse_world("hello\n\n  #s:1|x|-1|-1|-1|-1|1\n", NumberPolicy::Lenient).unwrap();
        assert!(world.spaces.is_empty());
    }

    #[test]
    fn trailing_separator_is_optional_and_crlf_is_tolerated() {
        let world = parse_world("#s:4|Attic|-1|-1|-1|-1|1\r\n", NumberPolicy::Strict).unwrap();
        assert_eq!(world.spaces[0].id, 4);
        assert!(world.spaces[0].illuminated);
    }

    #[test]
    fn lenient_numbers_follow_atol() {
        assert_eq!(leading_integer("12abc"), 12);
        assert_eq!(leading_integer("  -3"), -3);
        assert_eq!(leading_integer("+7\n"), 7);
        assert_eq!(leading_integer("abc"), 0);
        assert_eq!(leading_integer(""), 0);
        assert_eq!(leading_integer("-"), 0);
    }

    #[test]
    fn any_nonzero_illumination_is_lit() {
        let text = "#s:1|A|-1|-1|-1|-1|2|\n#s:2|B|-1|-1|-1|-1|-1|\n#s:3|C|-1|-1|-1|-1|0|\n";
        for policy in [NumberPolicy::Lenient, NumberPolicy::Strict] {
            let world = parse_world(text, policy).unwrap();
            assert!(world.spaces[0].illuminated);
            assert!(world.spaces[1].illuminated);
            assert!(!world.spaces[2].illuminated);
        }
    }

    #[test]
    fn lenient_policy_coerces_malformed_fields() {
        let world = parse_world("#s:x|Odd|oops|-1|2z|-1|yes|\n", NumberPolicy::Lenient).unwrap();
        let space = &world.spaces[0];
        assert_eq!(space.id, 0);
        assert_eq!(space.north, Some(0));
        assert_eq!(space.south, Some(2));
        assert!(!space.illuminated);
    }

    #[test]
    fn strict_policy_rejects_malformed_fields() {
        let err = parse_world("#s:1|Odd|oops|-1|2|-1|1|\n", NumberPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 1,
                field: "north",
                value: "oops".into()
            }
        );
    }

    #[test]
    fn missing_fields_fail_under_both_policies() {
        for policy in [NumberPolicy::Lenient, NumberPolicy::Strict] {
            let err = parse_world("\n#s:1|Short|-1\n", policy).unwrap_err();
            assert_eq!(err, ParseError::MissingField { line: 2, field: "east" });
        }
    }

    #[test]
    fn long_names_are_truncated_or_rejected() {
        let line = format!("#o:1|{}|-1|\n", "a".repeat(NAME_MAX + 5));
        let world = parse_world(&line, NumberPolicy::Lenient).unwrap();
        assert_eq!(world.objects[0].name.len(), NAME_MAX);

        let err = parse_world(&line, NumberPolicy::Strict).unwrap_err();
        assert!(matches!(err, ParseError::NameTooLong { line: 1, .. }));
    }
}
