//! Persistent key-value storage
//!
//! The browser-style `getItem`/`setItem` surface the project cache sits on.
//! [`FileStorage`] keeps every key as a JSON file in a data directory,
//! [`MemoryStorage`] keeps values in a map for tests and embedding.

use crate::error::Result;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String key-value store with synchronous access
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value for `key`, `None` if it was never set
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// File-backed storage, one `<key>.json` file per key
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`, creating the directory if needed
    pub fn new(dir: &Path) -> Self {
        if let Err(e) = std::fs::create_dir_all(dir) {
            log::warn!("Failed to create storage directory: {}", e);
        } else {
            log::info!("Storage directory: {:?}", dir);
        }

        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Directory the storage files live in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => {
                log::debug!("Storage hit for key: {}", key);
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        // Write then rename so readers never observe a half-written file
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, self.path(key))?;

        log::debug!("Stored {} bytes under key: {}", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}
