//! # Persistent Storage
//!
//! Key/value persistence for user preferences (today: the selected theme).
//!
//! - [`KeyValueStore`] - fallible backend capability (`get`, `set`, `remove`)
//! - [`FileStore`] - JSON document in the user data directory
//! - [`MemoryStore`] - process-local store for tests and `--ephemeral` runs
//! - [`SecureStorage`] - the wrapper every caller goes through: sanitizes
//!   keys and values and never lets a backend failure escape

pub mod file_store;
pub mod memory_store;
pub mod secure;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use secure::SecureStorage;

use thiserror::Error;

/// Failures reported by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {size} bytes over a limit of {limit}")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("Storage access denied: {0}")]
    AccessDenied(String),
}

/// A persistent string-to-string store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
