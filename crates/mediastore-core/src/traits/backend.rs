//! Backend adapter trait — the caller-facing storage contract.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::batch::BatchDeleteOutcome;
use crate::types::file_type::TypeFilter;
use crate::types::id::FileId;
use crate::types::pagination::{FilePage, PageRequest};
use crate::types::progress::ProgressSink;
use crate::types::record::FileRecord;

/// An upload handed to the backend by the upload source.
#[derive(Debug)]
pub struct UploadRequest {
    /// Owner identity supplied by the identity provider.
    pub owner_id: String,
    /// Caller-supplied file name, arbitrary characters allowed.
    pub original_name: String,
    /// MIME type declared by the upload source, if any.
    pub declared_type: Option<String>,
    /// Descriptive source platform.
    pub platform: String,
    /// The payload bytes.
    pub data: Bytes,
    /// Optional best-effort progress sink.
    pub progress: Option<ProgressSink>,
}

/// Filter and pagination parameters for a listing.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Owner identity; exact match, required.
    pub owner_id: String,
    /// Optional file-type filter.
    pub file_type: TypeFilter,
    /// Pagination window.
    pub page: PageRequest,
}

impl ListQuery {
    /// A listing for everything the owner has, first page defaults.
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            file_type: TypeFilter::All,
            page: PageRequest::default(),
        }
    }
}

/// Usage statistics over the owner's active records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    /// Bytes used by active records.
    pub used_bytes: u64,
    /// Configured quota in bytes, 0 when the backend enforces none.
    pub quota_bytes: u64,
    /// Used percentage of the quota, 0 when no quota applies.
    pub used_percent: u8,
    /// Number of active records.
    pub file_count: u64,
}

/// The storage contract both backend variants implement.
///
/// The variant is selected once at process start from configuration and
/// never mixed at runtime. Callers hold it as `Arc<dyn FileBackend>`.
#[async_trait]
pub trait FileBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend variant name (`"local"` or `"remote"`).
    fn backend_type(&self) -> &str;

    /// Check whether the backend is reachable and usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store a payload, create its metadata record, and return a copy.
    async fn upload(&self, request: UploadRequest) -> AppResult<FileRecord>;

    /// List active records matching the query, newest first.
    async fn list(&self, query: &ListQuery) -> AppResult<FilePage>;

    /// Fetch a single active record by id.
    async fn get(&self, id: &FileId) -> AppResult<Option<FileRecord>>;

    /// Mark a record soft-deleted. Returns `false` if the id is absent.
    async fn soft_delete(&self, id: &FileId) -> AppResult<bool>;

    /// Remove a record and its payload. Payload removal is best-effort;
    /// a missing id is a `NotFound` error.
    async fn hard_delete(&self, id: &FileId) -> AppResult<()>;

    /// Hard-delete each id concurrently, bounding every sub-operation
    /// by `timeout`. Per-id results come back in input order.
    async fn batch_delete(
        &self,
        ids: &[FileId],
        timeout: Duration,
    ) -> AppResult<BatchDeleteOutcome>;

    /// Usage statistics for one owner.
    async fn storage_info(&self, owner_id: &str) -> AppResult<StorageInfo>;
}
