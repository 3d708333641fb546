//! Upload directory on local disk
//!
//! Files are written whole under names produced by
//! [`models::upload::stored_name`](crate::models::upload::stored_name).
//! Reading them back is left to `tower_http::services::ServeDir`.

use std::io;
use std::path::{Path, PathBuf};

/// Directory holding uploaded images
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory tree if it is missing.
    pub async fn ensure(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Write `bytes` under `stored_name`, returning the full path.
    ///
    /// `stored_name` must already be sanitized; it is joined onto the root
    /// as a single path component.
    pub async fn save(&self, stored_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        if stored_name.is_empty() || stored_name.contains(['/', '\\']) || stored_name == ".." {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to store upload as '{}'", stored_name),
            ));
        }

        self.ensure().await?;
        let path = self.root.join(stored_name);
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Upload saved");
        Ok(path)
    }

    /// Delete a file written by [`save`](Self::save). Failures are logged,
    /// not returned; a missing file is not a failure.
    pub async fn remove(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => tracing::debug!(path = %path.display(), "Upload removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to remove upload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadDir::new(dir.path().join("static").join("uploads"));

        let path = uploads.save("1-abc-photo.png", b"\x89PNG").await.unwrap();

        assert_eq!(path, uploads.root().join("1-abc-photo.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }

    #[tokio::test]
    async fn remove_deletes_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadDir::new(dir.path());

        let path = uploads.save("2-abc-cat.gif", b"GIF89a").await.unwrap();
        uploads.remove(&path).await;
        assert!(!path.exists());

        // second removal finds nothing and stays quiet
        uploads.remove(&path).await;
    }

    #[tokio::test]
    async fn save_rejects_path_components() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = UploadDir::new(dir.path());

        for name in ["", "..", "../escape.png", "a/b.png", "a\\b.png"] {
            let err = uploads.save(name, b"x").await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "name: {name:?}");
        }
    }
}
