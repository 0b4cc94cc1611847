#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Oca **
//! Small text-adventure engine

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

use oca_data::NumberPolicy;
use oca_engine::repl::CommandLog;
use oca_engine::{EngineConfig, OCA_VERSION, load_game, run_repl};

#[derive(Debug, Parser)]
#[command(name = "oca_engine", version, about = "Play a world file in the Oca engine")]
struct Cli {
    /// World file to load (defaults to `world_file` from the config)
    world_file: Option<PathBuf>,
    /// Configuration file (defaults to `oca.toml` in the data directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append every command and its outcome to this file
    #[arg(long)]
    log: Option<PathBuf>,
    /// Seed the die for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
    /// Reject malformed numbers and broken references in the world file
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_default()?,
    };
    if let Some(seed) = cli.seed {
        config.die.seed = Some(seed);
    }
    if cli.strict {
        config.loader.numbers = NumberPolicy::Strict;
    }

    let world_path = cli.world_file.unwrap_or_else(|| config.world_path());
    info!("Start: loading world from '{}'", world_path.display());
    let mut game = load_game(&world_path, &config).context("while loading game")?;
    let log = cli.log.as_deref().map(CommandLog::open).transpose()?;

    println!("{}", format!("OCA ENGINE v{OCA_VERSION}").bright_yellow().underline());
    run_repl(&mut game, log)
}
