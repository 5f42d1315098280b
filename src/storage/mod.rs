//! Key-value persistence for the game.
//!
//! The [`Storage`] trait models a string key-value store such as browser
//! local storage. The game is kept as a single JSON blob under the
//! configured key; see [`load_game`] and [`save_game`].

pub mod blob;
pub mod error;
pub mod file;
pub mod memory;

pub use blob::{clear_game, decode, encode, load_game, save_game};
pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String key-value store.
pub trait Storage {
    /// Read the value under `key`; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
