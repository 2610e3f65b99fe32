//! Places a serialized user record can live

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{Error, Result};

/// Durable client-side slot holding at most one serialized user record
pub trait SessionStore: Send + Sync {
    /// The stored record, `None` when the slot is empty
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, record: &str) -> Result<()>;

    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<()>;
}

/// JSON file in the user's config directory, used by the CLI
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// `~/.config/luxe/session.json`
    pub fn default_location() -> Self {
        Self::at_path(luxe_config::config_dir().join("session.json"))
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&self, record: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, record)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Process-local slot for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(record.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        let slot = self.slot.lock().map_err(|_| Error::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, record: &str) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|_| Error::Poisoned)?;
        *slot = Some(record.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|_| Error::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, record: &str) -> Result<()> {
        (**self).save(record)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at_path(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), None);
        store.save(r#"{"id":"1"}"#).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"id":"1"}"#));
        assert!(!store.path().with_extension("json.tmp").exists());

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::with_record("x");
        assert_eq!(store.load().unwrap().as_deref(), Some("x"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
