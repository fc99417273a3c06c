//! Built-in session slots.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{SessionError, SessionResult, SessionSlot};

/// Process-local slot. Clones share the same cell, so a clone handed to a
/// second store behaves like storage that outlived the first one.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionSlot {
    cell: Arc<Mutex<Option<String>>>,
}

impl SessionSlot for MemorySessionSlot {
    fn read(&self) -> SessionResult<Option<String>> {
        let guard = self
            .cell
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, raw: &str) -> SessionResult<()> {
        let mut guard = self
            .cell
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        *guard = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        let mut guard = self
            .cell
            .lock()
            .map_err(|error| SessionError::Storage(error.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Slot persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionSlot {
    path: PathBuf,
}

impl FileSessionSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionSlot for FileSessionSlot {
    fn read(&self) -> SessionResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SessionError::Storage(format!(
                "Failed to read session at {}: {}",
                self.path.display(),
                error
            ))),
        }
    }

    fn write(&self, raw: &str) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                SessionError::Storage(format!(
                    "Failed to create session directory {}: {}",
                    parent.display(),
                    error
                ))
            })?;
        }

        std::fs::write(&self.path, raw).map_err(|error| {
            SessionError::Storage(format!(
                "Failed to write session at {}: {}",
                self.path.display(),
                error
            ))
        })
    }

    fn clear(&self) -> SessionResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionError::Storage(format!(
                "Failed to remove session at {}: {}",
                self.path.display(),
                error
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    #[test]
    fn file_slot_roundtrips_across_stores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = SessionStore::rehydrate(FileSessionSlot::new(&path));
        store.login("file-token", None).unwrap();
        assert!(path.exists());

        let restarted = SessionStore::rehydrate(FileSessionSlot::new(&path));
        assert_eq!(restarted.token(), Some("file-token"));
    }

    #[test]
    fn file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSessionSlot::new(dir.path().join("session.json"));

        slot.clear().unwrap();
        slot.write("{}").unwrap();
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }
}
