//! Key-value persistence for per-device progress.
//!
//! Values are plain strings. [`FileStore`] keeps them in a flat TOML table
//! and rewrites the file on every `set`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Set to `"true"` once an income has been classified.
pub const ASSESSMENT_COMPLETED_KEY: &str = "realMiddleAssessmentCompleted";

/// Serialized [`ProgressTracker`](crate::progress::ProgressTracker).
pub const PROGRESS_KEY: &str = "realMiddleProgress";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot read state file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write state file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("state file '{path}' is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode state: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("stored value for key '{key}' is malformed: {source}")]
    Decode {
        key: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Get/set access to string values by key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError>;

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a TOML file of string values.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the state file at `path`. A missing file is an empty store; it
    /// is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| StorageError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file yet, starting empty");
                BTreeMap::new()
            }
            Err(source) => return Err(StorageError::Read { path, source }),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let contents = toml::to_string(&self.entries)?;
        fs::write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "saved state");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Whether an assessment has been completed on this device.
pub fn assessment_completed(store: &dyn KeyValueStore) -> Result<bool, StorageError> {
    Ok(store.get(ASSESSMENT_COMPLETED_KEY)?.as_deref() == Some("true"))
}

pub fn mark_assessment_completed(store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    store.set(ASSESSMENT_COMPLETED_KEY, "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_state_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("real-middle-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join("state.toml")
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn assessment_flag_defaults_to_false() {
        let mut store = MemoryStore::new();
        assert!(!assessment_completed(&store).unwrap());

        mark_assessment_completed(&mut store).unwrap();
        assert!(assessment_completed(&store).unwrap());
        assert_eq!(
            store.get(ASSESSMENT_COMPLETED_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let path = temp_state_path("missing");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(PROGRESS_KEY).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn file_store_persists_across_opens() {
        let path = temp_state_path("persist");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.set(ASSESSMENT_COMPLETED_KEY, "true").unwrap();
        store.set(PROGRESS_KEY, "multi\nline \"value\"").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(ASSESSMENT_COMPLETED_KEY).unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(
            reopened.get(PROGRESS_KEY).unwrap().as_deref(),
            Some("multi\nline \"value\"")
        );
    }

    #[test]
    fn file_store_rejects_malformed_toml() {
        let path = temp_state_path("malformed");
        fs::write(&path, "not = [valid").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }
}
