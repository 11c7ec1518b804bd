//! lab-core: Core game logic for the treasure labyrinth
//!
//! This crate contains the game state engine with no I/O dependencies:
//! the room graph, the deterministic event and trap system, and the
//! puzzle and treasure resolution. Room content is supplied by the caller
//! as a [`dungeon::RoomTable`].

pub mod action;
pub mod config;
pub mod dungeon;
pub mod object;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use config::{ConfigError, EngineConfig};
pub use consts::*;
pub use gameloop::{GameLoop, GameLoopResult, GameState, Narration, Outcome};
pub use rng::pseudo_random;
