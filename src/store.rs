use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::{Credential, Tweet, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("store file {} is not a valid JSON array: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode records for {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("store lock for {} is poisoned", .0.display())]
    Poisoned(PathBuf),
}

/// Append-only store backed by a single JSON-array file.
///
/// Every write re-serializes the whole array to a sibling temp file and
/// renames it over the original, so readers never observe a partial write
/// and a shorter rewrite cannot leave stale trailing bytes. The mutex
/// serializes the read-modify-write cycle within the process; cross-process
/// coordination is out of scope.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Opens the store, creating an empty `[]` file if none exists yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "[]").map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            debug!("initialized empty store at {}", path.display());
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record and returns it. Duplicates are not detected; every
    /// call grows the store by exactly one record.
    pub fn append(&self, record: T) -> Result<T, StoreError> {
        let _guard = self.guard()?;
        let mut records = self.load()?;
        records.push(record.clone());
        self.persist(&records)?;
        debug!(
            "appended record to {} ({} total)",
            self.path.display(),
            records.len()
        );
        Ok(record)
    }

    /// Returns every stored record in append order.
    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.guard()?;
        self.load()
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, StoreError> {
        self.lock
            .lock()
            .map_err(|_| StoreError::Poisoned(self.path.clone()))
    }

    fn load(&self) -> Result<Vec<T>, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = NamedTempFile::new_in(dir).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::to_writer(tmp.as_file(), records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

/// The three per-entity stores the service runs on.
pub struct Stores {
    pub users: JsonStore<User>,
    pub credentials: JsonStore<Credential>,
    pub tweets: JsonStore<Tweet>,
}

impl Stores {
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            users: JsonStore::open(data_dir.join("users.json"))?,
            credentials: JsonStore::open(data_dir.join("credentials.json"))?,
            tweets: JsonStore::open(data_dir.join("tweets.json"))?,
        })
    }
}
