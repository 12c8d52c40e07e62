//! Persistence adapters. The domain layer serializes each collection to
//! one JSON document and hands it to an adapter; adapters decide where
//! the bytes live. Tests inject the in-memory adapter, real hosts use
//! the JSON-directory one.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::error::{AppError, AppResult};

/// The four persisted collections, each a flat array of entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Plants,
    Rooms,
    CheckIns,
    EditRecords,
}

impl Collection {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Collection::Plants => "plants",
            Collection::Rooms => "rooms",
            Collection::CheckIns => "check-ins",
            Collection::EditRecords => "edit-records",
        }
    }

    pub const ALL: [Collection; 4] = [
        Collection::Plants,
        Collection::Rooms,
        Collection::CheckIns,
        Collection::EditRecords,
    ];
}

pub trait StorageAdapter: Send + Sync {
    /// Returns the raw document for a collection, or `None` if nothing
    /// has been written yet.
    fn read(&self, collection: Collection) -> anyhow::Result<Option<String>>;

    /// Durably replaces the document for a collection.
    fn write(&self, collection: Collection, payload: &str) -> anyhow::Result<()>;
}

/// Cheap-to-clone handle the domain layer holds; maps adapter failures
/// into the crate error taxonomy.
#[derive(Clone)]
pub struct StorageHandle {
    inner: Arc<dyn StorageAdapter>,
}

impl StorageHandle {
    pub fn new(adapter: Arc<dyn StorageAdapter>) -> Self {
        Self { inner: adapter }
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(MemoryAdapter::default()),
        }
    }

    pub fn json_dir(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let adapter = JsonDirAdapter::new(dir)?;
        Ok(Self {
            inner: Arc::new(adapter),
        })
    }

    /// Adapter rooted at the per-user data directory
    /// (`<data_dir>/plant-nurse`), falling back to the current
    /// directory when the platform offers no data dir.
    pub fn user_data() -> anyhow::Result<Self> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::json_dir(base.join("plant-nurse"))
    }

    pub fn read(&self, collection: Collection) -> AppResult<Option<String>> {
        self.inner
            .read(collection)
            .map_err(|source| AppError::StorageRead {
                collection: collection.key(),
                source,
            })
    }

    pub fn write(&self, collection: Collection, payload: &str) -> AppResult<()> {
        self.inner
            .write(collection, payload)
            .map_err(|source| AppError::StorageWrite {
                collection: collection.key(),
                source,
            })
    }
}

/// Volatile adapter for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryAdapter {
    data: Mutex<HashMap<&'static str, String>>,
}

impl StorageAdapter for MemoryAdapter {
    fn read(&self, collection: Collection) -> anyhow::Result<Option<String>> {
        let guard = self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("memory adapter poisoned"))?;
        Ok(guard.get(collection.key()).cloned())
    }

    fn write(&self, collection: Collection, payload: &str) -> anyhow::Result<()> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("memory adapter poisoned"))?;
        guard.insert(collection.key(), payload.to_string());
        Ok(())
    }
}

/// One `<collection>.json` file per collection inside a directory.
/// Writes go through a temp file in the same directory and rename over
/// the target, so readers never observe a torn document.
pub struct JsonDirAdapter {
    dir: PathBuf,
}

impl JsonDirAdapter {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create storage dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.key()))
    }
}

impl StorageAdapter for JsonDirAdapter {
    fn read(&self, collection: Collection) -> anyhow::Result<Option<String>> {
        let path = self.path_for(collection);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
        }
    }

    fn write(&self, collection: Collection, payload: &str) -> anyhow::Result<()> {
        let path = self.path_for(collection);
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("create temp file in {}", self.dir.display()))?;
        tmp.write_all(payload.as_bytes())
            .with_context(|| format!("write {}", path.display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("sync {}", path.display()))?;
        tmp.persist(&path)
            .with_context(|| format!("persist {}", path.display()))?;
        Ok(())
    }
}
