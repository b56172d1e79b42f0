//! JSON-file persistence adapter.
//!
//! Each collection lives under its own key as one JSON file in the data
//! directory, mirroring the shop's in-memory state. Writes go through a
//! temp-file rename so a crash mid-write never leaves a half-written
//! collection behind. Loads treat a missing *or unparsable* file as absent
//! and fall back to the default - corruption is logged, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Storage keys, one per persisted blob.
pub mod keys {
    /// Product collection.
    pub const PRODUCTS: &str = "products";
    /// Customer collection.
    pub const CUSTOMERS: &str = "customers";
    /// Order collection.
    pub const ORDERS: &str = "orders";
    /// Notification collection.
    pub const NOTIFICATIONS: &str = "notifications";
    /// Favorite product IDs.
    pub const FAVORITES: &str = "favorites";
    /// UI theme flag.
    pub const THEME: &str = "theme";
}

/// UI theme flag persisted alongside the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

/// Errors on the persistence save path.
///
/// The load path never errors: missing and corrupt files fall back to
/// defaults by design.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value store backed by JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the value stored under `key`, falling back to the default when
    /// the file is missing or unparsable. An unparsable file is logged at
    /// warn and treated as absent.
    #[must_use]
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(key, error = %err, "failed to read stored value, using default");
                }
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "stored value is unparsable, using default");
                T::default()
            }
        }
    }

    /// Save `value` under `key`, atomically (write temp file, then rename).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the filesystem write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.tmp"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn scratch_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_key_yields_default() {
        let (_dir, store) = scratch_store();
        let value: Vec<String> = store.load(keys::PRODUCTS);
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_dir, store) = scratch_store();
        let value = vec!["a".to_string(), "b".to_string()];
        store.save(keys::FAVORITES, &value).unwrap();

        let loaded: Vec<String> = store.load(keys::FAVORITES);
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_unparsable_file_treated_as_absent() {
        let (dir, store) = scratch_store();
        fs::write(dir.path().join("customers.json"), "{not json!").unwrap();

        let loaded: Vec<String> = store.load(keys::CUSTOMERS);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (_dir, store) = scratch_store();
        store.save(keys::THEME, &Theme::Dark).unwrap();
        store.save(keys::THEME, &Theme::Light).unwrap();

        let theme: Theme = store.load(keys::THEME);
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (dir, store) = scratch_store();
        store.save(keys::ORDERS, &Vec::<String>::new()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonStore::open(&nested).unwrap();
        assert!(store.dir().exists());
    }
}
