//! Local file service — mutation engine and [`FileBackend`] implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use mediastore_core::config::upload::UploadConfig;
use mediastore_core::error::AppError;
use mediastore_core::result::AppResult;
use mediastore_core::traits::{
    FileBackend, ListQuery, PayloadStore, RecordStore, StorageInfo, UploadRequest,
};
use mediastore_core::types::{BatchDeleteOutcome, FileId, FilePage, FileRecord};

use crate::batch;

/// The local backend variant: query and mutation engines running
/// in-process over a [`RecordStore`] and a [`PayloadStore`].
///
/// The record store only supports whole-collection replace, so every
/// load-modify-save cycle runs under `write_lock` to avoid lost
/// updates between concurrent mutations. Reads bypass the lock.
#[derive(Debug)]
pub struct FileService {
    /// The persisted metadata collection.
    records: Arc<dyn RecordStore>,
    /// Where payload bytes live.
    payloads: Arc<dyn PayloadStore>,
    /// Upload limits and allowed extensions.
    upload_config: UploadConfig,
    /// Total-size quota over all active records; 0 disables the check.
    quota_bytes: u64,
    /// Serializes load-modify-save cycles.
    write_lock: Mutex<()>,
}

impl FileService {
    /// Create a new local file service.
    pub fn new(
        records: Arc<dyn RecordStore>,
        payloads: Arc<dyn PayloadStore>,
        upload_config: UploadConfig,
        quota_bytes: u64,
    ) -> Self {
        Self {
            records,
            payloads,
            upload_config,
            quota_bytes,
            write_lock: Mutex::new(()),
        }
    }

    pub(crate) fn records(&self) -> &Arc<dyn RecordStore> {
        &self.records
    }

    pub(crate) fn payloads(&self) -> &Arc<dyn PayloadStore> {
        &self.payloads
    }

    pub(crate) fn upload_config(&self) -> &UploadConfig {
        &self.upload_config
    }

    pub(crate) fn quota_bytes(&self) -> u64 {
        self.quota_bytes
    }

    pub(crate) async fn lock_writes(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Mark a record soft-deleted. Returns `false` when the id is
    /// absent; calling it again on an already-deleted record still
    /// reports success. The record never reappears in listings.
    pub async fn soft_delete_record(&self, id: &FileId) -> AppResult<bool> {
        let _guard = self.lock_writes().await;
        let mut all = self.records.load_all().await?;

        let Some(record) = all.iter_mut().find(|r| &r.id == id) else {
            warn!(id = %id, "Soft delete target not found");
            return Ok(false);
        };
        record.mark_deleted();
        self.records.save_all(&all).await?;

        info!(id = %id, "Soft-deleted file");
        Ok(true)
    }

    /// Remove a record and its payload.
    ///
    /// Payload removal comes first and is best-effort: a failure is
    /// logged and never blocks the metadata removal, since the payload
    /// may already be gone.
    pub async fn hard_delete_record(&self, id: &FileId) -> AppResult<()> {
        let _guard = self.lock_writes().await;
        let mut all = self.records.load_all().await?;

        let Some(index) = all.iter().position(|r| &r.id == id) else {
            return Err(AppError::not_found(format!("File not found: {id}")));
        };

        if let Err(e) = self.payloads.remove(&all[index].file_url).await {
            warn!(id = %id, error = %e, "Payload removal failed, removing metadata anyway");
        }

        all.remove(index);
        self.records.save_all(&all).await?;

        info!(id = %id, "Hard-deleted file");
        Ok(())
    }
}

#[async_trait]
impl FileBackend for FileService {
    fn backend_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.records.load_all().await?;
        Ok(true)
    }

    async fn upload(&self, request: UploadRequest) -> AppResult<FileRecord> {
        self.upload_file(request).await
    }

    async fn list(&self, query: &ListQuery) -> AppResult<FilePage> {
        self.list_files(query).await
    }

    async fn get(&self, id: &FileId) -> AppResult<Option<FileRecord>> {
        self.get_file(id).await
    }

    async fn soft_delete(&self, id: &FileId) -> AppResult<bool> {
        self.soft_delete_record(id).await
    }

    async fn hard_delete(&self, id: &FileId) -> AppResult<()> {
        self.hard_delete_record(id).await
    }

    async fn batch_delete(
        &self,
        ids: &[FileId],
        timeout: Duration,
    ) -> AppResult<BatchDeleteOutcome> {
        let outcome = batch::delete_each(ids, timeout, |id| self.hard_delete_record(id)).await;
        info!(
            success = outcome.success.len(),
            failed = outcome.failed.len(),
            "Batch delete finished"
        );
        Ok(outcome)
    }

    async fn storage_info(&self, owner_id: &str) -> AppResult<StorageInfo> {
        self.usage_for(owner_id).await
    }
}
