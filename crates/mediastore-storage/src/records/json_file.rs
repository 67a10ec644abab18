//! File-backed record store — a single JSON array at a fixed path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use mediastore_core::error::{AppError, ErrorKind};
use mediastore_core::result::AppResult;
use mediastore_core::traits::RecordStore;
use mediastore_core::types::FileRecord;

/// Record store persisting the collection as one JSON array on disk.
///
/// Absence of the file is equivalent to an empty collection. Saves go
/// through a temporary file followed by a rename so a concurrent
/// `load_all` never observes a torn write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path of the persisted JSON array.
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given path, creating parent
    /// directories as needed.
    pub async fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create data directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(Self { path })
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load_all(&self) -> AppResult<Vec<FileRecord>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            // First run: no data yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read collection: {}", self.path.display()),
                    e,
                ));
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                // A corrupt collection is recovered as empty, never fatal.
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Persisted collection failed to parse, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_all(&self, records: &[FileRecord]) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(records)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write collection: {}", tmp_path.display()),
                e,
            )
        })?;
        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace collection: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mediastore_core::types::{FileId, FileStatus, FileType};

    use super::*;

    fn record(id: &str) -> FileRecord {
        FileRecord {
            id: FileId::from(id),
            file_name: format!("{id}.png"),
            original_name: "photo.png".to_string(),
            file_type: FileType::Image,
            file_url: format!("/uploads/images/{id}.png"),
            file_size: 10,
            upload_time: Utc::now(),
            user_id: "u1".to_string(),
            platform: "h5".to_string(),
            status: FileStatus::Active,
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("files.json"))
            .await
            .expect("store");
        assert!(store.load_all().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("files.json"))
            .await
            .expect("store");

        store
            .save_all(&[record("file_1_a"), record("file_2_b")])
            .await
            .expect("save");

        let loaded = store.load_all().await.expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id.as_str(), "file_1_a");
    }

    #[tokio::test]
    async fn test_save_replaces_whole_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("files.json"))
            .await
            .expect("store");

        store.save_all(&[record("file_1_a")]).await.expect("save");
        store.save_all(&[record("file_2_b")]).await.expect("save");

        let loaded = store.load_all().await.expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "file_2_b");
    }

    #[tokio::test]
    async fn test_corrupt_file_recovered_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("files.json");
        tokio::fs::write(&path, b"{not json[").await.expect("write");

        let store = JsonFileStore::new(&path).await.expect("store");
        assert!(store.load_all().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/data/files.json");
        let store = JsonFileStore::new(&path).await.expect("store");
        store.save_all(&[record("file_1_a")]).await.expect("save");
        assert!(path.exists());
    }
}
