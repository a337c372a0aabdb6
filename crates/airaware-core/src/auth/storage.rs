use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use keyring::Entry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StorageError;

/// Key under which the serialized session is kept, whatever the backend.
pub const SESSION_KEY: &str = "airquality-user";

/// Keychain service name for the keyring backend
const SERVICE_NAME: &str = "airaware";

/// A single durable record holding the serialized session.
///
/// Backends only move opaque text around; the session store owns the
/// encoding.
pub trait SessionStorage: Send {
    /// Read the record, `None` if nothing is stored
    fn get(&self) -> Result<Option<String>, StorageError>;

    /// Replace the record
    fn set(&self, contents: &str) -> Result<(), StorageError>;

    /// Remove the record. Removing a missing record is not an error.
    fn delete(&self) -> Result<(), StorageError>;
}

/// Which storage medium holds the session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Keyring,
    Memory,
}

impl StorageBackend {
    /// Open the configured backend. `dir` is only used by the file backend.
    pub fn open(self, dir: PathBuf) -> Box<dyn SessionStorage> {
        debug!(backend = ?self, "Opening session storage");
        match self {
            StorageBackend::File => Box::new(FileStorage::new(dir)),
            StorageBackend::Keyring => Box::new(KeyringStorage::default()),
            StorageBackend::Memory => Box::new(MemoryStorage::default()),
        }
    }
}

// ============================================================================
// File
// ============================================================================

/// Session record kept as a JSON file in the cache directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn record_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", SESSION_KEY))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self) -> Result<Option<String>, StorageError> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, contents: &str) -> Result<(), StorageError> {
        let path = self.record_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        let path = self.record_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ============================================================================
// OS keychain
// ============================================================================

/// Session record kept as a secret in the OS keychain
pub struct KeyringStorage {
    account: String,
}

impl Default for KeyringStorage {
    fn default() -> Self {
        Self {
            account: SESSION_KEY.to_string(),
        }
    }
}

impl KeyringStorage {
    /// Keychain entry under a different account name than the session key
    pub fn with_account(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }

    fn entry(&self) -> Result<Entry, StorageError> {
        Ok(Entry::new(SERVICE_NAME, &self.account)?)
    }
}

impl SessionStorage for KeyringStorage {
    fn get(&self) -> Result<Option<String>, StorageError> {
        match self.entry()?.get_password() {
            Ok(contents) => Ok(Some(contents)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, contents: &str) -> Result<(), StorageError> {
        self.entry()?.set_password(contents)?;
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Process-local record. Clones share the same slot, so a test can keep a
/// handle and hand another to a store, or to a second store after a
/// simulated restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with a record
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a usable value
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot().clone())
    }

    fn set(&self, contents: &str) -> Result<(), StorageError> {
        *self.slot() = Some(contents.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        *self.slot() = None;
        Ok(())
    }
}
