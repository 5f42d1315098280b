//! Result of a store mutation.

use crate::rules::ScoreViolation;

/// What a mutation entry point did.
///
/// Rejections are not errors: the state is left exactly as it was and the
/// violations explain why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// State changed, was persisted and (where applicable) re-rendered
    Applied,

    /// Nothing changed
    Rejected(Vec<ScoreViolation>),
}

impl MutationOutcome {
    pub(crate) fn rejected(violation: ScoreViolation) -> Self {
        Self::Rejected(vec![violation])
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Reasons for a rejection; empty when applied.
    pub fn violations(&self) -> &[ScoreViolation] {
        match self {
            Self::Applied => &[],
            Self::Rejected(violations) => violations,
        }
    }
}
