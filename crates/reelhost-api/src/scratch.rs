//! Scratch file lifecycle for the video ingestion pipeline.
//!
//! Uploaded bytes and their remuxed derivative live on local disk only for
//! the duration of one request. Each file is owned by a `ScratchFile` guard
//! that removes it when dropped, so every exit path (success, error, client
//! abort) leaves the temp directory clean.

use reelhost_core::AppError;
use std::path::{Path, PathBuf};

/// Owns a temp-directory file and deletes it on drop.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `data` to `path` and take ownership of the file.
    pub async fn create(path: PathBuf, data: &[u8]) -> Result<Self, AppError> {
        tokio::fs::write(&path, data).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to write scratch file {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), size_bytes = data.len(), "Scratch file written");
        Ok(Self { path })
    }

    /// Take ownership of a file some other process produced (e.g. a remux
    /// output, possibly partial after a failure).
    pub fn adopt(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Scratch file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_writes_and_drop_removes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.mp4");

        let scratch = ScratchFile::create(path.clone(), b"payload").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");

        drop(scratch);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_adopt_removes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.mp4.processed.mp4");
        std::fs::write(&path, b"partial output").unwrap();

        drop(ScratchFile::adopt(path.clone()));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_drop_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        // Never written; drop must not panic
        drop(ScratchFile::adopt(dir.path().join("never-written.mp4")));
    }

    #[tokio::test]
    async fn test_create_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-subdir").join("abc.mp4");
        let err = ScratchFile::create(path, b"payload").await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
