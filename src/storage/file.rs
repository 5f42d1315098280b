//! File-backed key-value storage.

use super::error::StorageError;
use super::Storage;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each key as `<root>/<key>.json`.
///
/// The root directory is created on first write. Writes replace the file
/// atomically.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let usable = !key.is_empty()
            && !key.contains("..")
            && !key.contains(|c: char| c == '/' || c == '\\' || c == '\0');
        if !usable {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(key: &str, source: io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    /// Writes to a temp file beside the target and renames it into place,
    /// so an interrupted write leaves the previous value intact.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| io_error(key, e))?;

        let mut staged = NamedTempFile::new_in(&self.root).map_err(|e| io_error(key, e))?;
        staged
            .write_all(value.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| io_error(key, e))?;
        staged
            .persist(&path)
            .map(|_| ())
            .map_err(|e| io_error(key, e.error))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
