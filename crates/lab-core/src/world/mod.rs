//! World-driven effects that happen to the player

pub mod events;

pub use events::{ArrivalEvent, random_event};
