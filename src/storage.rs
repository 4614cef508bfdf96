//! Storage
//!
//! Durable per-device key-value storage. The app persists exactly one value through it (the
//! chosen language), and every caller treats it as best-effort.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing the backing file
    #[error("storage IO failed: {0}")]
    Io(#[from] io::Error),

    /// The backing file is not a JSON object
    #[error("storage file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// The backend refused the operation (disabled, quota exceeded, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string key-value store that survives reloads.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage that lives only as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// Storage backed by a JSON object file. A missing file reads as empty.
///
/// Keys this crate does not own are left in place, whatever their value type. A non-string value
/// reads as absent.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a store backed by the file at `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Map::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(error) => Err(error.into()),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.read_all()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Only unparseable contents are replaced; IO failures abort the write.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Corrupted(error)) => {
                warn!(path = %self.path.display(), %error, "replacing corrupted storage file");

                Map::new()
            }
            Err(error) => return Err(error),
        };

        values.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_storage_round_trip() -> TestResult {
        let mut storage = MemoryStorage::new();

        assert_eq!(storage.get("app-lang")?, None);

        storage.set("app-lang", "RO")?;
        storage.set("app-lang", "EN")?;

        assert_eq!(storage.get("app-lang")?, Some("EN".to_string()));

        Ok(())
    }

    #[test]
    fn file_storage_missing_file_reads_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path().join("absent.json"));

        assert_eq!(storage.get("app-lang")?, None);

        Ok(())
    }

    #[test]
    fn file_storage_persists_across_instances() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("storage.json");

        FileStorage::new(&path).set("app-lang", "RO")?;
        FileStorage::new(&path).set("other", "value")?;

        let reopened = FileStorage::new(&path);

        assert_eq!(reopened.get("app-lang")?, Some("RO".to_string()));
        assert_eq!(reopened.get("other")?, Some("value".to_string()));

        Ok(())
    }

    #[test]
    fn file_storage_reports_corruption() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json")?;

        let result = FileStorage::new(&path).get("app-lang");

        assert!(matches!(result, Err(StorageError::Corrupted(_))));

        Ok(())
    }

    #[test]
    fn file_storage_write_keeps_foreign_keys() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{ "theme": "dark", "volume": 3 }"#)?;

        let mut storage = FileStorage::new(&path);
        storage.set("app-lang", "EN")?;

        let saved: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;

        assert_eq!(saved.get("theme"), Some(&Value::from("dark")));
        assert_eq!(saved.get("volume"), Some(&Value::from(3)));
        assert_eq!(saved.get("app-lang"), Some(&Value::from("EN")));
        assert_eq!(storage.get("theme")?, Some("dark".to_string()));
        assert_eq!(storage.get("volume")?, None, "non-string values read as absent");

        Ok(())
    }

    #[test]
    fn file_storage_write_fails_when_unreadable() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::new(dir.path());

        let result = storage.set("app-lang", "EN");

        assert!(matches!(result, Err(StorageError::Io(_))));

        Ok(())
    }

    #[test]
    fn file_storage_write_replaces_corrupted_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2")?;

        let mut storage = FileStorage::new(&path);
        storage.set("app-lang", "EN")?;

        assert_eq!(storage.get("app-lang")?, Some("EN".to_string()));

        Ok(())
    }
}
