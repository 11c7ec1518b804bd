//! Player action system
//!
//! Implements player commands and the resolvers they reach.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub mod apply;
pub mod movement;
pub mod pickup;
pub mod prompt;
pub mod puzzle;
pub mod trap;
pub mod treasure;

pub use prompt::{Prompt, ScriptedPrompt};

/// Player command types
///
/// Arguments stay raw strings: unknown directions and item names are
/// normal player mistakes, answered with a message rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Look,
    Inventory,
    Take(String),
    Use(String),
    Solve,
    Quit,
}

/// Movement directions
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a player-typed direction token
    pub fn parse(token: &str) -> Option<Direction> {
        token.trim().parse().ok()
    }
}

/// Result of a player action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action changed the game state
    Success,
    /// Action was refused or had no effect
    NoTime,
    /// Player died
    Died(String),
    /// Player opened the treasure chest
    Won,
    /// Player quit or interrupted a prompt
    Quit,
}
