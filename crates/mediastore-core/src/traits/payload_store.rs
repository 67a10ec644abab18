//! Payload store trait — where file bytes physically live.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Locators for a stored payload.
#[derive(Debug, Clone)]
pub struct StoredPayload {
    /// Opaque locator recorded as the record's `fileUrl`.
    pub file_url: String,
    /// Thumbnail locator, if the payload is an image.
    pub thumbnail: Option<String>,
}

/// Storage for the file bytes referenced by a record's `fileUrl`.
///
/// The local variant inlines payloads as base64 data URIs; a record's
/// locator is then self-contained and `remove` has nothing to do.
#[async_trait]
pub trait PayloadStore: Send + Sync + std::fmt::Debug + 'static {
    /// Store a payload and return its locator.
    async fn store(
        &self,
        file_name: &str,
        mime_type: &str,
        data: Bytes,
        is_image: bool,
    ) -> AppResult<StoredPayload>;

    /// Remove the payload behind a locator. Callers treat failures as
    /// best-effort; the payload may already be gone.
    async fn remove(&self, file_url: &str) -> AppResult<()>;
}
