//! Score rules evaluated with Validation.

use crate::rules::context::ScoreChange;
use crate::rules::violations::ScoreViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom check functions
pub type ScoreCheck =
    Box<dyn Fn(&ScoreChange) -> Validation<(), NonEmptyVec<ScoreViolation>> + Send + Sync>;

/// Rules every increment must satisfy.
/// Uses Validation to accumulate ALL violations.
pub struct ScoreRules {
    pub(crate) max_score: Option<u32>,
    pub(crate) required_checks: Vec<ScoreCheck>,
}

impl ScoreRules {
    /// Enforce all rules, accumulating ALL violations.
    ///
    /// A zero increment is always refused; the score cap applies only when
    /// one is configured.
    pub fn enforce(&self, change: &ScoreChange) -> Validation<(), NonEmptyVec<ScoreViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ScoreViolation>>> = Vec::new();

        checks.push(if change.points == 0 {
            Validation::fail(ScoreViolation::ZeroPoints)
        } else {
            Validation::success(())
        });

        if let Some(limit) = self.max_score {
            let attempted = change.attempted();
            let check = if attempted > u64::from(limit) {
                Validation::fail(ScoreViolation::ScoreLimitExceeded { limit, attempted })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(change));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn max_score(&self) -> Option<u32> {
        self.max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builder::ScoreRulesBuilder;

    fn change(current_score: u32, points: u32) -> ScoreChange {
        ScoreChange {
            player: 0,
            current_score,
            points,
        }
    }

    #[test]
    fn increment_within_limit_passes() {
        let rules = ScoreRulesBuilder::new().max_score(2000).build();

        assert!(rules.enforce(&change(0, 35)).is_success());
        assert!(rules.enforce(&change(1965, 35)).is_success());
    }

    #[test]
    fn increment_past_limit_fails() {
        let rules = ScoreRulesBuilder::new().max_score(2000).build();

        let result = rules.enforce(&change(1970, 35));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ScoreViolation::ScoreLimitExceeded {
                        limit: 2000,
                        attempted: 2005
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn no_limit_means_no_cap() {
        let rules = ScoreRulesBuilder::new().build();

        assert!(rules.enforce(&change(u32::MAX - 1, 1)).is_success());
        assert_eq!(rules.max_score(), None);
    }

    #[test]
    fn refused_increment_reports_every_broken_rule() {
        let rules = ScoreRulesBuilder::new()
            .max_score(10)
            .check_that(|c| c.player == 1, "Only the second seat")
            .build();

        let result = rules.enforce(&change(20, 0));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_zero = errors
                    .iter()
                    .any(|e| matches!(e, ScoreViolation::ZeroPoints));
                let has_limit = errors
                    .iter()
                    .any(|e| matches!(e, ScoreViolation::ScoreLimitExceeded { .. }));
                let has_custom = errors
                    .iter()
                    .any(|e| matches!(e, ScoreViolation::CustomCheckFailed { .. }));

                assert!(has_zero);
                assert!(has_limit);
                assert!(has_custom);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn fives_only_check_refuses_odd_points() {
        let rules = ScoreRulesBuilder::new()
            .check(|c: &ScoreChange| {
                if c.points % 5 == 0 {
                    Validation::success(())
                } else {
                    Validation::fail(ScoreViolation::CustomCheckFailed {
                        message: "Muggins scores in fives".to_string(),
                    })
                }
            })
            .build();

        assert!(rules.enforce(&change(0, 15)).is_success());
        assert!(rules.enforce(&change(0, 7)).is_failure());
    }
}
