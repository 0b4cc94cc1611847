use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for duplicate ids or dangling references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: RawId },
    MissingReference { kind: &'static str, id: RawId, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// Links between spaces are directed, so a one-way passage is not an error;
/// only links to spaces that do not exist are reported.
///
/// ```
/// use oca_data::{SpaceDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     spaces: vec![SpaceDef {
///         id: 1,
///         name: "Start".into(),
///         north: None,
///         east: None,
///         south: Some(2),
///         west: None,
///         illuminated: true,
///     }],
///     ..WorldDef::default()
/// };
/// let errors = validate_world(&world);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(), "missing space '2' (south exit of space 1)");
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.spaces.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world defines no spaces".into(),
        });
    }

    let mut spaces = HashSet::new();
    let mut objects = HashSet::new();
    track_ids("space", world.spaces.iter().map(|s| s.id), &mut spaces, &mut errors);
    track_ids("object", world.objects.iter().map(|o| o.id), &mut objects, &mut errors);

    for space in &world.spaces {
        for (direction, link) in space.links() {
            if let Some(to) = link {
                check_space(
                    &spaces,
                    to,
                    || format!("{direction} exit of space {}", space.id),
                    &mut errors,
                );
            }
        }
    }

    for object in &world.objects {
        if let Some(location) = object.location {
            check_space(
                &spaces,
                location,
                || format!("location of object {} '{}'", object.id, object.name),
                &mut errors,
            );
        }
    }

    if let Some(start) = world.player.as_ref().and_then(|p| p.start) {
        check_space(&spaces, start, || "player start".to_string(), &mut errors);
    }

    errors
}

fn track_ids(
    kind: &'static str,
    ids: impl Iterator<Item = RawId>,
    seen: &mut HashSet<RawId>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId { kind, id });
        }
    }
}

fn check_space(
    spaces: &HashSet<RawId>,
    id: RawId,
    context: impl FnOnce() -> String,
    errors: &mut Vec<ValidationError>,
) {
    if !spaces.contains(&id) {
        errors.push(ValidationError::MissingReference {
            kind: "space",
            id,
            context: context(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(id: RawId, north: Option<RawId>, south: Option<RawId>) -> SpaceDef {
        SpaceDef {
            id,
            name: format!("Space {id}"),
            north,
            east: None,
            south,
            west: None,
            illuminated: true,
        }
    }

    #[test]
    fn clean_world_has_no_errors() {
        let world = WorldDef {
            spaces: vec![space(1, None, Some(2)), space(2, Some(1), None)],
            objects: vec![ObjectDef {
                id: 5,
                name: "coin".into(),
                location: Some(2),
            }],
            player: Some(PlayerDef {
                name: "p".into(),
                start: Some(1),
            }),
        };
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn one_way_links_are_allowed() {
        let world = WorldDef {
            spaces: vec![space(1, None, Some(2)), space(2, None, None)],
            ..WorldDef::default()
        };
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn empty_world_is_rejected() {
        let errors = validate_world(&WorldDef::default());
        assert!(matches!(errors.as_slice(), [ValidationError::InvalidValue { .. }]));
    }

    #[test]
    fn duplicates_and_dangling_references_are_reported() {
        let world = WorldDef {
            spaces: vec![space(1, Some(9), None), space(1, None, None)],
            objects: vec![ObjectDef {
                id: 3,
                name: "rope".into(),
                location: Some(4),
            }],
            player: Some(PlayerDef {
                name: "p".into(),
                start: Some(7),
            }),
        };
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateId { kind: "space", id: 1 }));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { id: 9, context, .. } if context == "north exit of space 1"
        )));
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::MissingReference { id: 4, .. }))
        );
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::MissingReference { id: 7, .. }))
        );
    }
}
