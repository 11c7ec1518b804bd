//! Room graph: rooms, exits, puzzles

mod graph;
mod room;

pub use graph::{GraphError, RoomGraph, RoomTable};
pub use room::{Puzzle, Room, RoomId};
