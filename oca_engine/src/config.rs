//! Engine configuration.
//!
//! Settings live in `oca.toml` in the data directory. Every field has a
//! default, so the file (or any section of it) may be left out entirely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use oca_data::NumberPolicy;
use serde::Deserialize;

use crate::Die;
use crate::data_paths::data_path;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "oca.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// World file to load; relative paths are resolved in the data directory.
    pub world_file: PathBuf,
    pub die: DieConfig,
    pub limits: Limits,
    pub loader: LoaderConfig,
}
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world_file: PathBuf::from("world.dat"),
            die: DieConfig::default(),
            limits: Limits::default(),
            loader: LoaderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DieConfig {
    pub min: u32,
    pub max: u32,
    /// Fixed seed for reproducible rolls.
    pub seed: Option<u64>,
}
impl Default for DieConfig {
    fn default() -> Self {
        Self {
            min: Die::DEFAULT_MIN,
            max: Die::DEFAULT_MAX,
            seed: None,
        }
    }
}

/// Registry and per-space capacities.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_spaces: usize,
    pub max_objects: usize,
    pub max_objects_per_space: usize,
}
impl Default for Limits {
    fn default() -> Self {
        Self {
            max_spaces: 100,
            max_objects: 100,
            max_objects_per_space: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub numbers: NumberPolicy,
}

impl EngineConfig {
    /// Load the configuration at `path`, or the defaults if it doesn't exist.
    ///
    /// # Errors
    /// - if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&text).with_context(|| format!("parsing config file '{}'", path.display()))?;
        info!("config loaded from '{}'", path.display());
        Ok(config)
    }

    /// Load `oca.toml` from the data directory.
    ///
    /// # Errors
    /// See [`EngineConfig::load`].
    pub fn load_default() -> Result<Self> {
        Self::load(&data_path(CONFIG_FILE))
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    /// - on malformed TOML, unknown keys or mistyped values
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build the die described by the `[die]` section.
    ///
    /// # Errors
    /// - if the bounds are invalid
    pub fn build_die(&self) -> Result<Die> {
        let DieConfig { min, max, seed } = self.die;
        let die = match seed {
            Some(seed) => Die::seeded(min, max, seed),
            None => Die::new(min, max),
        };
        die.context("invalid [die] settings")
    }

    /// Resolved location of the world file.
    pub fn world_path(&self) -> PathBuf {
        if self.world_file.is_absolute() {
            self.world_file.clone()
        } else {
            data_path(&self.world_file)
        }
    }
}
