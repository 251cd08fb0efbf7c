//! Filesystem implementation of AvatarStore
//!
//! A flat directory of PNG files. No manifest, no eviction; saving an
//! existing name overwrites it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use mentor_avatar::{is_safe_filename, AvatarStore, DomainError};

/// Flat-directory avatar store
pub struct FsAvatarStore {
    root: PathBuf,
}

impl FsAvatarStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            DomainError::Storage(format!(
                "Failed to create output directory {}: {e}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf, DomainError> {
        if !is_safe_filename(filename) {
            return Err(DomainError::Validation(format!(
                "Invalid avatar filename: {}",
                filename
            )));
        }
        Ok(self.root.join(filename))
    }
}

#[async_trait]
impl AvatarStore for FsAvatarStore {
    async fn save(&self, filename: &str, png: &[u8]) -> Result<(), DomainError> {
        let path = self.path_for(filename)?;
        tokio::fs::write(&path, png).await.map_err(|e| {
            DomainError::Storage(format!("Failed to write {}: {e}", path.display()))
        })
    }

    async fn load(&self, filename: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let path = self.path_for(filename)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}
