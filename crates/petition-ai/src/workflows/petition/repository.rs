use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::application::PetitionApplication;

/// Current layout of [`StoredApplication`]. Bump when the persisted shape changes.
pub const SCHEMA_VERSION: u32 = 1;
pub const STORAGE_KEY: &str = "o1a-visa-application";

/// Versioned envelope written by every store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredApplication {
    pub schema_version: u32,
    pub storage_key: String,
    pub application: PetitionApplication,
}

impl StoredApplication {
    pub fn new(application: PetitionApplication) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            storage_key: STORAGE_KEY.to_string(),
            application,
        }
    }

    /// Reject envelopes written by an incompatible version.
    pub fn ensure_supported(&self) -> Result<(), StoreError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    pub fn into_application(self) -> Result<PetitionApplication, StoreError> {
        self.ensure_supported()?;
        Ok(self.application)
    }
}

/// Storage abstraction so the service can run against memory or disk.
pub trait ApplicationStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredApplication>, StoreError>;
    fn save(&self, stored: &StoredApplication) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unsupported schema version {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },
    #[error("stored application is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<StoredApplication>>,
}

impl MemoryStore {
    pub fn with_application(application: PetitionApplication) -> Self {
        Self {
            slot: Mutex::new(Some(StoredApplication::new(application))),
        }
    }

    pub fn snapshot(&self) -> Option<StoredApplication> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ApplicationStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredApplication>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, stored: &StoredApplication) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(stored.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        Ok(())
    }
}

/// One pretty-printed JSON document per storage key inside a state directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ApplicationStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoredApplication>, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let stored: StoredApplication = serde_json::from_slice(&raw)?;
        stored.ensure_supported()?;
        Ok(Some(stored))
    }

    fn save(&self, stored: &StoredApplication) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_vec_pretty(stored)?;
        let staging = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&staging)?;
            file.write_all(&payload)?;
            file.sync_all()?;
        }
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
