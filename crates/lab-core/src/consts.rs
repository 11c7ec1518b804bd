//! Core game constants
//!
//! These are the defaults for [`crate::EngineConfig`].

/// One arrival in this many sets off a random event
pub const EVENT_PROBABILITY_MODULO: u32 = 10;

/// Number of random event kinds (loot, scare, trap check)
pub const RANDOM_EVENT_TYPES: u32 = 3;

/// Range of the death roll when a trap springs on an empty-handed player
pub const TRAP_DANGER_MODULO: u32 = 10;

/// Death rolls below this value are fatal
pub const TRAP_DEATH_THRESHOLD: u32 = 3;

/// Answer that confirms the treasure code prompt
pub const CONFIRM_WORD: &str = "yes";

/// Spelled-out seven, accepted by the treasure lock for the code "7"
pub const SEVEN_WORD: &str = "seven";
