//! Core game data.
//!
//! This module contains the pure data model of the score keeper:
//! - [`GameState`]: both players in fixed seat order
//! - [`Player`]: name, running score and point history
//! - [`HistoryEntry`]: one timestamped increment, the unit of undo
//!
//! Nothing here performs I/O; persistence and rendering live in the
//! `storage`, `render` and `store` modules.

mod history;
mod player;
mod state;

pub use history::HistoryEntry;
pub use player::{fallback_name, Player};
pub use state::{GameState, DEFAULT_PLAYER_NAME, PLAYER_COUNT};
