//! Validation-based rules for score increments.
//!
//! Each proposed increment is checked against every rule and ALL
//! violations are collected with Stillwater's `Validation` type, so a
//! refused increment reports every reason at once.
//!
//! # Example
//!
//! ```rust
//! use muggins::rules::{ScoreChange, ScoreRulesBuilder};
//!
//! let rules = ScoreRulesBuilder::new().max_score(2000).build();
//!
//! let ok = ScoreChange { player: 0, current_score: 1990, points: 10 };
//! let too_much = ScoreChange { player: 0, current_score: 1990, points: 15 };
//!
//! assert!(rules.enforce(&ok).is_success());
//! assert!(rules.enforce(&too_much).is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod score_rules;
pub mod violations;

pub use builder::ScoreRulesBuilder;
pub use context::ScoreChange;
pub use score_rules::ScoreRules;
pub use violations::ScoreViolation;
