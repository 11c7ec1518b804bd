//! lab-data: Static game content for the treasure labyrinth
//!
//! Contains the room definitions and the help command table.

pub mod commands;
pub mod rooms;

pub use commands::{COMMANDS, CommandHelp};
pub use rooms::{ROOMS, RoomDef, default_graph, room_table};
