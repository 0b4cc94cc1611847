//! Builds a [`Game`] from a world file.
//!
//! Loading runs in three stages: `oca_data` parses the text into a `WorldDef`,
//! validates its cross-references, and the definitions are then turned into
//! registered spaces, objects and the player. Under the strict loader policy
//! any validation or capacity problem aborts the load; under the lenient
//! policy it is logged and the offending entry is skipped.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use oca_data::{NumberPolicy, ObjectDef, SpaceDef, WorldDef, parse_world, validate_world};

use crate::config::{EngineConfig, Limits};
use crate::object::ObjectHolder;
use crate::{Direction, Entity, Game, Id, Object, Player, Space};

/// Load the world file at `path` into a new game.
///
/// # Errors
/// - if the file cannot be read, parsed, or (in strict mode) fails validation
pub fn load_game(path: &Path, config: &EngineConfig) -> Result<Game> {
    let text = fs::read_to_string(path).with_context(|| format!("reading world file '{}'", path.display()))?;
    build_game(&text, config).with_context(|| format!("loading world from '{}'", path.display()))
}

/// Build a game from the text of a world file.
///
/// # Errors
/// - on parse errors, or on any validation/capacity problem in strict mode
pub fn build_game(text: &str, config: &EngineConfig) -> Result<Game> {
    let policy = config.loader.numbers;
    let def = parse_world(text, policy).context("while parsing world file")?;
    check_world(&def, policy)?;

    let mut game = Game::new(&config.limits, config.build_die()?);
    add_spaces(&mut game, &def.spaces, &config.limits, policy)?;
    add_objects(&mut game, &def.objects, policy)?;
    game.player = build_player(&game, &def, policy)?;

    info!("{} spaces added to game", game.spaces.len());
    info!("{} objects added to game", game.objects.len());
    match game.player.location {
        Some(start) => info!("player \"{}\" starts in space {start}", game.player.name),
        None => warn!("player \"{}\" has no starting space", game.player.name),
    }
    Ok(game)
}

/// Fail on `problem` in strict mode, otherwise log it and carry on.
fn tolerate(policy: NumberPolicy, problem: impl Display) -> Result<()> {
    if policy == NumberPolicy::Strict {
        bail!("{problem}");
    }
    warn!("{problem}");
    Ok(())
}

/// Validate the parsed world, returning a single aggregated error in strict mode.
fn check_world(def: &WorldDef, policy: NumberPolicy) -> Result<()> {
    let errors = validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    if policy == NumberPolicy::Strict {
        let details = errors
            .into_iter()
            .map(|err| format!("- {err}"))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("world validation failed:\n{details}");
    }
    for err in errors {
        warn!("world validation: {err}");
    }
    Ok(())
}

fn add_spaces(game: &mut Game, defs: &[SpaceDef], limits: &Limits, policy: NumberPolicy) -> Result<()> {
    for def in defs {
        let mut space = Space::new(Id(def.id), &def.name, limits.max_objects_per_space);
        for (direction, (_, link)) in Direction::ALL.into_iter().zip(def.links()) {
            space.set_neighbor(direction, link.map(Id));
        }
        space.illuminated = def.illuminated;
        debug!("space {} ({}) built", space.id(), space.name());
        if let Err(err) = game.add_space(space) {
            tolerate(policy, format_args!("space {} skipped: {err}", def.id))?;
        }
    }
    Ok(())
}

fn add_objects(game: &mut Game, defs: &[ObjectDef], policy: NumberPolicy) -> Result<()> {
    for def in defs {
        let id = Id(def.id);
        if game.object(id).is_some() {
            tolerate(policy, format_args!("object {id} ({}) skipped: id already in use", def.name))?;
            continue;
        }
        if let Err(err) = game.add_object(Object::new(id, &def.name)) {
            tolerate(policy, format_args!("object {id} skipped: {err}"))?;
            continue;
        }
        let Some(space_id) = def.location.map(Id) else {
            debug!("object {id} ({}) registered but not placed", def.name);
            continue;
        };
        // unknown spaces were already reported by validation
        let Some(space) = game.space_mut(space_id) else {
            continue;
        };
        match space.add_object(id) {
            Ok(()) => debug!("object {id} ({}) placed in space {space_id}", def.name),
            Err(err) => tolerate(policy, format_args!("object {id} not placed in space {space_id}: {err}"))?,
        }
    }
    Ok(())
}

/// The `#p:` player if given, otherwise a default player in the first space.
fn build_player(game: &Game, def: &WorldDef, policy: NumberPolicy) -> Result<Player> {
    let first = game.space_id_at(0);
    let Some(player_def) = &def.player else {
        return Ok(Player::new(Player::default().name, first));
    };
    let start = match player_def.start.map(Id) {
        Some(start) if game.space(start).is_some() => Some(start),
        Some(start) => {
            tolerate(policy, format_args!("player start space {start} not loaded"))?;
            first
        },
        None => first,
    };
    Ok(Player::new(&player_def.name, start))
}
