//! Engine tuning knobs
//!
//! Every field has a default from [`crate::consts`], so a config file only
//! needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    CONFIRM_WORD, EVENT_PROBABILITY_MODULO, RANDOM_EVENT_TYPES, SEVEN_WORD, TRAP_DANGER_MODULO,
    TRAP_DEATH_THRESHOLD,
};

/// Minimum event kinds needed to reach the loot, scare and trap branches
const MIN_EVENT_TYPES: u32 = 3;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("event probability modulo must be positive")]
    ZeroEventModulo,

    #[error("random event types must be at least 3, found {0}")]
    TooFewEventTypes(u32),

    #[error("trap danger modulo must be positive")]
    ZeroDangerModulo,

    #[error("trap death threshold {threshold} exceeds danger modulo {modulo}")]
    ThresholdAboveModulo { threshold: u32, modulo: u32 },

    #[error("confirmation word must not be blank")]
    BlankConfirmWord,

    #[error("seven word alias must not be blank")]
    BlankSevenWord,

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Constants consumed by the event, trap and treasure resolvers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// An arrival event fires with probability 1/event_probability_modulo
    pub event_probability_modulo: u32,
    /// Range of the event kind roll; everything past 1 is a trap check
    pub random_event_types: u32,
    /// Range of the death roll
    pub trap_danger_modulo: u32,
    /// Death rolls below this are fatal
    pub trap_death_threshold: u32,
    /// Word accepted as "yes" at the treasure code prompt
    pub confirm_word: String,
    /// Word accepted as the treasure code when the code is "7"
    pub seven_word_alias: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            event_probability_modulo: EVENT_PROBABILITY_MODULO,
            random_event_types: RANDOM_EVENT_TYPES,
            trap_danger_modulo: TRAP_DANGER_MODULO,
            trap_death_threshold: TRAP_DEATH_THRESHOLD,
            confirm_word: CONFIRM_WORD.to_string(),
            seven_word_alias: SEVEN_WORD.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges the resolvers rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_probability_modulo == 0 {
            return Err(ConfigError::ZeroEventModulo);
        }
        if self.random_event_types < MIN_EVENT_TYPES {
            return Err(ConfigError::TooFewEventTypes(self.random_event_types));
        }
        if self.trap_danger_modulo == 0 {
            return Err(ConfigError::ZeroDangerModulo);
        }
        if self.trap_death_threshold > self.trap_danger_modulo {
            return Err(ConfigError::ThresholdAboveModulo {
                threshold: self.trap_death_threshold,
                modulo: self.trap_danger_modulo,
            });
        }
        if self.confirm_word.trim().is_empty() {
            return Err(ConfigError::BlankConfirmWord);
        }
        if self.seven_word_alias.trim().is_empty() {
            return Err(ConfigError::BlankSevenWord);
        }
        Ok(())
    }
}
