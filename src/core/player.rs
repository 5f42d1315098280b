//! Player record: name, running score and point history.

use super::history::HistoryEntry;
use serde::{Deserialize, Serialize};

/// A player's name, running score and point history.
///
/// The score always equals the sum of the history's points. Only
/// [`Player::record`], [`Player::undo`] and [`Player::clear`] touch either
/// field, and each keeps both in step.
///
/// # Example
///
/// ```rust
/// use muggins::core::{HistoryEntry, Player};
///
/// let mut player = Player::new("Ada");
/// player.record(HistoryEntry::now(35));
/// assert_eq!(player.score(), 35);
///
/// let undone = player.undo().unwrap();
/// assert_eq!(undone.points, 35);
/// assert_eq!(player.score(), 0);
/// assert!(player.history().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

impl Player {
    /// Create a player with a zero score and empty history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Recorded increments, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The most recent increment, if any.
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    /// Sum of all recorded increments.
    ///
    /// Widened to `u64` so a hand-edited blob cannot overflow the sum.
    pub fn total_points(&self) -> u64 {
        self.history.iter().map(|e| u64::from(e.points)).sum()
    }

    /// Append an increment and add its points to the score.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.score = self.score.saturating_add(entry.points);
        self.history.push(entry);
    }

    /// Remove the most recent increment and subtract its points.
    ///
    /// Returns `None` and leaves the player untouched when the history is empty.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let last = self.history.pop()?;
        self.score = self.score.saturating_sub(last.points);
        Some(last)
    }

    /// Zero the score and drop the whole history.
    pub fn clear(&mut self) {
        self.score = 0;
        self.history.clear();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Name given to a player whose name field was left blank.
///
/// `index` is zero-based; the label is one-based.
pub fn fallback_name(index: usize) -> String {
    format!("Player {}", index + 1)
}
