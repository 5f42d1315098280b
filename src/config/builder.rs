//! Fluent builder for [`GameConfig`].

use super::error::ConfigError;
use super::GameConfig;

/// Builder for game configurations.
///
/// Unset fields keep their [`GameConfig::default`] values.
///
/// # Example
///
/// ```rust
/// use muggins::config::GameConfigBuilder;
///
/// let config = GameConfigBuilder::new()
///     .max_score(121)
///     .increments(vec![1, 2, 5])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_score(), 121);
/// assert_eq!(config.storage_key(), "domino-counter");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    storage_key: Option<String>,
    max_score: Option<u32>,
    increments: Option<Vec<u32>>,
    default_name: Option<String>,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key the game blob is stored under.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    pub fn max_score(mut self, limit: u32) -> Self {
        self.max_score = Some(limit);
        self
    }

    /// Increment button values, in display order.
    pub fn increments(mut self, increments: Vec<u32>) -> Self {
        self.increments = Some(increments);
        self
    }

    /// Name both players start with.
    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = Some(name.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if any field is unusable.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let defaults = GameConfig::default();

        let storage_key = self.storage_key.unwrap_or(defaults.storage_key);
        if storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if storage_key.contains(|c: char| c == '/' || c == '\\') || storage_key.contains("..") {
            return Err(ConfigError::InvalidStorageKey(storage_key));
        }

        let max_score = self.max_score.unwrap_or(defaults.max_score);
        if max_score == 0 {
            return Err(ConfigError::ZeroMaxScore);
        }

        let increments = self.increments.unwrap_or(defaults.increments);
        if increments.is_empty() {
            return Err(ConfigError::NoIncrements);
        }
        if increments.contains(&0) {
            return Err(ConfigError::ZeroIncrement);
        }

        Ok(GameConfig {
            storage_key,
            max_score,
            increments,
            default_name: self.default_name.unwrap_or(defaults.default_name),
        })
    }
}
