//! Fluent construction of score rules.

use crate::config::GameConfig;
use crate::rules::context::ScoreChange;
use crate::rules::score_rules::{ScoreCheck, ScoreRules};
use crate::rules::violations::ScoreViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Collects a score cap and house checks into [`ScoreRules`].
///
/// Start from a [`GameConfig`] to inherit its score limit, then add house
/// checks on top:
///
/// ```rust
/// use muggins::config::GameConfig;
/// use muggins::rules::{ScoreChange, ScoreRulesBuilder};
///
/// let rules = ScoreRulesBuilder::from(&GameConfig::default())
///     .check_that(|c| c.points % 5 == 0, "Muggins scores in fives")
///     .build();
///
/// let change = ScoreChange { player: 0, current_score: 1990, points: 15 };
/// assert!(rules.enforce(&change).is_failure());
/// ```
pub struct ScoreRulesBuilder {
    max_score: Option<u32>,
    checks: Vec<ScoreCheck>,
}

impl ScoreRulesBuilder {
    /// Rules with no score cap and no house checks.
    pub fn new() -> Self {
        Self {
            max_score: None,
            checks: Vec::new(),
        }
    }

    /// Refuse increments that would take a score past `limit`.
    pub fn max_score(mut self, limit: u32) -> Self {
        self.max_score = Some(limit);
        self
    }

    /// Lower the cap to `limit` unless an even lower one is already set.
    pub fn cap_at(mut self, limit: u32) -> Self {
        self.max_score = Some(self.max_score.map_or(limit, |current| current.min(limit)));
        self
    }

    /// Add a house check that reports its own violations.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&ScoreChange) -> Validation<(), NonEmptyVec<ScoreViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a house check; increments failing `allowed` are refused with
    /// `message`.
    pub fn check_that<F>(mut self, allowed: F, message: impl Into<String>) -> Self
    where
        F: Fn(&ScoreChange) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.checks.push(Box::new(move |change: &ScoreChange| {
            if allowed(change) {
                Validation::success(())
            } else {
                Validation::fail(ScoreViolation::CustomCheckFailed {
                    message: message.clone(),
                })
            }
        }));
        self
    }

    pub fn build(self) -> ScoreRules {
        ScoreRules {
            max_score: self.max_score,
            required_checks: self.checks,
        }
    }
}

impl Default for ScoreRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&GameConfig> for ScoreRulesBuilder {
    fn from(config: &GameConfig) -> Self {
        Self::new().max_score(config.max_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_inherits_limit() {
        let config = GameConfig::builder().max_score(121).build().unwrap();
        let rules = ScoreRulesBuilder::from(&config).build();

        assert_eq!(rules.max_score(), Some(121));
    }

    #[test]
    fn cap_at_never_raises_the_limit() {
        let rules = ScoreRulesBuilder::new().max_score(100).cap_at(2000).build();
        assert_eq!(rules.max_score(), Some(100));

        let rules = ScoreRulesBuilder::new().max_score(5000).cap_at(2000).build();
        assert_eq!(rules.max_score(), Some(2000));

        let rules = ScoreRulesBuilder::new().cap_at(2000).build();
        assert_eq!(rules.max_score(), Some(2000));
    }
}
