//! Treasure Labyrinth
//!
//! Main entry point for the game.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use lab_core::dungeon::RoomGraph;
use lab_core::{EngineConfig, GameLoop, GameLoopResult, GameState};
use labyrinth::{Console, logger, run_interactive, run_protocol};

/// Treasure Labyrinth - a text adventure
#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(author, version, about = "Treasure Labyrinth - find the chest and open it", long_about = None)]
struct Args {
    /// Room table (JSON) replacing the built-in labyrinth
    #[arg(long = "rooms")]
    rooms: Option<PathBuf>,

    /// Engine config (JSON); missing fields keep their defaults
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Speak the JSON line protocol on stdin/stdout
    #[arg(long = "json")]
    json: bool,

    /// Diagnostic output on stderr (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// No diagnostic output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(logger::level_from_flags(args.verbose, args.quiet))
        .context("failed to install logger")?;

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    let rooms = match &args.rooms {
        Some(path) => load_rooms(path)?,
        None => lab_data::default_graph().context("built-in room table is invalid")?,
    };
    log::info!("{} rooms loaded, starting in {}", rooms.len(), rooms.start());

    let mut game = GameLoop::new(GameState::new(rooms, config));

    if args.json {
        let stdin = io::stdin();
        return run_protocol(&mut game, stdin.lock(), io::stdout().lock());
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let result = run_interactive(&mut game, &mut console)?;
    match result {
        GameLoopResult::PlayerWon => log::info!("won in {} steps", game.state().steps_taken),
        GameLoopResult::PlayerDied(reason) => log::info!("died: {}", reason),
        GameLoopResult::PlayerQuit | GameLoopResult::Continue => {}
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    EngineConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn load_rooms(path: &Path) -> Result<RoomGraph> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read room table {}", path.display()))?;
    RoomGraph::from_json(&json).with_context(|| format!("invalid room table {}", path.display()))
}
