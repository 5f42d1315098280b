//! Game configuration.
//!
//! The defaults reproduce the classic muggins table: scores capped at 2000,
//! increment buttons from +5 to +35 in steps of five, and the game saved
//! under the `domino-counter` key.

use crate::core::DEFAULT_PLAYER_NAME;
use crate::rules::{ScoreRules, ScoreRulesBuilder};

pub mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::ConfigError;

/// Key the game is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "domino-counter";

/// Highest score a player may reach.
pub const DEFAULT_MAX_SCORE: u32 = 2000;

/// Points offered by the increment buttons, in display order.
pub const DEFAULT_INCREMENTS: [u32; 7] = [5, 10, 15, 20, 25, 30, 35];

/// Validated settings for a game. Build with [`GameConfigBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub(crate) storage_key: String,
    pub(crate) max_score: u32,
    pub(crate) increments: Vec<u32>,
    pub(crate) default_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_score: DEFAULT_MAX_SCORE,
            increments: DEFAULT_INCREMENTS.to_vec(),
            default_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Increment button values, in display order.
    pub fn increments(&self) -> &[u32] {
        &self.increments
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Score rules implied by this configuration.
    pub fn rules(&self) -> ScoreRules {
        ScoreRulesBuilder::from(self).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_table() {
        let config = GameConfig::default();

        assert_eq!(config.storage_key(), "domino-counter");
        assert_eq!(config.max_score(), 2000);
        assert_eq!(config.increments(), &[5, 10, 15, 20, 25, 30, 35]);
        assert_eq!(config.default_name(), "Enter your name");
    }

    #[test]
    fn rules_carry_score_limit() {
        let config = GameConfig::default();
        assert_eq!(config.rules().max_score(), Some(2000));
    }
}
