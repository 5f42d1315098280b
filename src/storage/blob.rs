//! Persisted game blob: JSON encoding plus silent load/save.
//!
//! Loading and saving never fail from the caller's point of view. Errors
//! are logged and the game falls back to safe defaults.

use super::error::StorageError;
use super::Storage;
use crate::config::GameConfig;
use crate::core::GameState;
use tracing::{debug, error, instrument};

/// Serialize a game to its JSON blob.
pub fn encode(state: &GameState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(|e| StorageError::SerializationFailed(e.to_string()))
}

/// Parse a JSON blob back into a game.
pub fn decode(blob: &str) -> Result<GameState, StorageError> {
    serde_json::from_str(blob).map_err(|e| StorageError::DeserializationFailed(e.to_string()))
}

/// Read the persisted game, or a fresh one if there is none.
///
/// A missing blob is silent. A corrupt blob or a failed read is logged
/// and replaced by a fresh game.
#[instrument(skip(storage, config), fields(key = config.storage_key()))]
pub fn load_game<S: Storage + ?Sized>(storage: &S, config: &GameConfig) -> GameState {
    let fresh = || GameState::new(config.default_name());

    let blob = match storage.get(config.storage_key()) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("No saved game, starting fresh");
            return fresh();
        }
        Err(e) => {
            error!(error = %e, "Failed to read saved game state");
            return fresh();
        }
    };

    match decode(&blob) {
        Ok(state) => {
            debug!("Restored saved game");
            state
        }
        Err(e) => {
            error!(error = %e, "Failed to parse saved game state");
            fresh()
        }
    }
}

/// Persist the game. Failures are logged and swallowed; there is no retry.
#[instrument(skip(storage, config, state), fields(key = config.storage_key()))]
pub fn save_game<S: Storage + ?Sized>(storage: &mut S, config: &GameConfig, state: &GameState) {
    let result = encode(state).and_then(|blob| storage.set(config.storage_key(), &blob));
    if let Err(e) = result {
        error!(error = %e, "Failed to save game state");
    }
}

/// Delete the persisted game. Failures are logged and swallowed.
#[instrument(skip(storage, config), fields(key = config.storage_key()))]
pub fn clear_game<S: Storage + ?Sized>(storage: &mut S, config: &GameConfig) {
    if let Err(e) = storage.remove(config.storage_key()) {
        error!(error = %e, "Failed to delete saved game state");
    }
}
