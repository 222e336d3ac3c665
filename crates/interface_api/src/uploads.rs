//! Proof-file storage under the web root
//!
//! Accepted files land in `<root>/uploads/` under a collision-resistant
//! name, `<uuid>_<original-file-name>`. Entities store only the relative
//! path. Deletion is best-effort: a failed cleanup is logged and never
//! fails the operation that triggered it.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

/// Directory name under the web root where proof files live
pub const UPLOADS_DIR: &str = "uploads";

/// Filesystem store for uploaded proof files
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Creates a store rooted at the given web root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persists file bytes under a freshly generated unique name
    ///
    /// Returns the relative path (`uploads/<uuid>_<name>`, forward slashes)
    /// that the owning entity should store.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
        let dir = self.root.join(UPLOADS_DIR);
        fs::create_dir_all(&dir).await?;

        // Strip any client-supplied directory components
        let safe_name = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");
        let unique_name = format!("{}_{}", Uuid::new_v4(), safe_name);

        fs::write(dir.join(&unique_name), bytes).await?;
        Ok(format!("{UPLOADS_DIR}/{unique_name}"))
    }

    /// Resolves a stored relative path to its absolute location
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Best-effort removal of a stored file
    ///
    /// Failures are logged and swallowed; cleanup never blocks the primary
    /// operation.
    pub async fn remove_quiet(&self, relative: &str) {
        let path = self.resolve(relative);
        if let Err(err) = fs::remove_file(&path).await {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!(file = relative, error = %err, "failed to remove uploaded file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("uploads-test-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_save_generates_unique_relative_paths() {
        let store = UploadStore::new(temp_root());

        let a = store.save("proof.pdf", b"one").await.unwrap();
        let b = store.save("proof.pdf", b"two").await.unwrap();

        assert_ne!(a, b);
        assert!(a.starts_with("uploads/"));
        assert!(a.ends_with("_proof.pdf"));
        assert_eq!(fs::read(store.resolve(&a)).await.unwrap(), b"one");
    }

    #[tokio::test]
    async fn test_save_strips_directory_components() {
        let store = UploadStore::new(temp_root());

        let stored = store.save("../../etc/passwd.pdf", b"x").await.unwrap();

        assert!(stored.ends_with("_passwd.pdf"));
        assert!(!stored.contains(".."));
    }

    #[tokio::test]
    async fn test_remove_quiet_swallows_missing_file() {
        let store = UploadStore::new(temp_root());
        store.remove_quiet("uploads/not-there.pdf").await;
    }

    #[tokio::test]
    async fn test_remove_quiet_deletes_stored_file() {
        let store = UploadStore::new(temp_root());
        let stored = store.save("proof.pdf", b"bytes").await.unwrap();

        store.remove_quiet(&stored).await;

        assert!(fs::metadata(store.resolve(&stored)).await.is_err());
    }
}
