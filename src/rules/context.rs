//! Context handed to score rule checks.

/// A proposed increment for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreChange {
    pub player: usize,
    pub current_score: u32,
    pub points: u32,
}

impl ScoreChange {
    /// Score the player would end up with (pure, never overflows).
    pub fn attempted(&self) -> u64 {
        u64::from(self.current_score) + u64::from(self.points)
    }
}
