use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use uuid::Uuid;

use crate::storage::{check_name, ArtifactStore, StorageError};

/// Artifact store backed by a single directory.
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    /// Opens the store, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create upload directory {}", root.display()))?;
        info!("Artifact store ready at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        check_name(name)?;
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(name)?;
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = write_and_flush(&mut file, bytes).await {
            drop(file);
            if let Err(rm) = tokio::fs::remove_file(&path).await {
                warn!("Failed to delete partial artifact {}: {rm}", path.display());
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn take(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(name)?;

        // Claim by rename first: only one concurrent taker can win it.
        let claimed = self.root.join(format!(".{name}.{}.claimed", Uuid::new_v4()));
        match tokio::fs::rename(&path, &claimed).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        }

        let read = tokio::fs::read(&claimed).await;

        // The claim is removed whether or not the read succeeded. It is already
        // unreachable under its public name, so a failed delete only leaves an orphan.
        if let Err(e) = tokio::fs::remove_file(&claimed).await {
            warn!("Failed to delete claimed artifact {}: {e}", claimed.display());
        }

        Ok(read?)
    }
}

async fn write_and_flush(file: &mut tokio::fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}
