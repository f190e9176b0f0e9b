use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::Path;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::fs;

/// Error type for flat-file store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Whole-collection JSON file store.
///
/// The file IS the table: `load` reads and parses the entire collection,
/// `save` serializes and overwrites the entire file. There is no file
/// locking and no atomic rename; concurrent read-modify-write cycles race
/// and the last writer wins, and a crash mid-write can corrupt the file.
/// This preserves the contract of the flat-file persistence this service
/// replaces.
pub struct JsonStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R> JsonStore<R>
where
    R: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. A missing file reads as an empty
    /// collection; any other failure propagates.
    ///
    /// # Errors
    /// * `Io` - Read failed for a reason other than the file missing
    /// * `Json` - File contents are not a valid JSON array of records
    pub async fn load(&self) -> Result<Vec<R>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Json {
                path: self.path.display().to_string(),
                source: e,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Io {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Overwrite the file with the full collection, pretty-printed like the
    /// original data files.
    ///
    /// # Errors
    /// * `Io` - Write failed
    /// * `Json` - Serialization failed
    pub async fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(|e| StoreError::Json {
            path: self.path.display().to_string(),
            source: e,
        })?;

        fs::write(&self.path, json).await.map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
