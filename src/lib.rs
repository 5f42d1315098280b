//! Muggins: a two-player tally score keeper
//!
//! Muggins keeps running scores and a per-player point history for
//! two-player tally games such as dominoes, persists them to a key-value
//! store after every change, and projects them into a view with increment
//! buttons, undo and a history list.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`]: pure game data (`GameState`, `Player`, `HistoryEntry`)
//! - [`rules`]: score rules that accumulate every violation
//! - [`render`]: pure state-to-view projection and output sinks
//! - [`storage`]: key-value persistence of the JSON game blob
//! - [`store`]: the `GameStore` controller tying the above together
//!
//! # Example
//!
//! ```rust
//! use muggins::config::GameConfig;
//! use muggins::render::GameView;
//! use muggins::storage::MemoryStorage;
//! use muggins::store::GameStore;
//!
//! let mut store = GameStore::open(GameConfig::default(), MemoryStorage::new(), |_: &GameView| {});
//!
//! store.rename_player(0, "Ada");
//! store.add_score(0, 35);
//! store.add_score(1, 10);
//!
//! let view = store.view();
//! assert_eq!(view.players[0].name, "Ada");
//! assert_eq!(view.players[0].score_label(), "35 (+35)");
//! ```

pub mod config;
pub mod core;
pub mod render;
pub mod rules;
pub mod shell;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use crate::config::GameConfig;
pub use crate::core::{GameState, HistoryEntry, Player};
pub use crate::store::{GameStore, MutationOutcome};
