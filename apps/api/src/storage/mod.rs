//! Transient artifact storage — generated documents live here until their single download.
//!
//! `AppState` holds an `Arc<dyn ArtifactStore>`; `LocalArtifactStore` is the
//! filesystem backend used in production and tests.

pub mod local;

use async_trait::async_trait;
use thiserror::Error;

pub use local::LocalArtifactStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("artifact not found: {0}")]
    NotFound(String),

    #[error("artifact already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid artifact name: {0}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores `bytes` under `name`. Each name is written once; a second `put`
    /// fails with `StorageError::AlreadyExists` and leaves the first untouched.
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Removes the artifact and returns its contents. At most one caller can
    /// take a given artifact; every later call gets `StorageError::NotFound`.
    async fn take(&self, name: &str) -> Result<Vec<u8>, StorageError>;
}

/// Rejects names that could address anything outside the store's directory.
pub fn check_name(name: &str) -> Result<(), StorageError> {
    let bad = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}
