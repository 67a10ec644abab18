//! File record entity — the sole persisted entity of the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::file_type::FileType;
use crate::types::id::FileId;

/// Lifecycle status of a file record.
///
/// The transition is one-way: a record goes `Active` → `Deleted` and is
/// never resurrected. Serialized as the integer the persisted layout uses
/// (1 = active, 0 = soft-deleted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FileStatus {
    /// The record is visible to queries.
    Active,
    /// The record has been soft-deleted and is hidden from queries.
    Deleted,
}

impl From<FileStatus> for u8 {
    fn from(status: FileStatus) -> u8 {
        match status {
            FileStatus::Active => 1,
            FileStatus::Deleted => 0,
        }
    }
}

impl TryFrom<u8> for FileStatus {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Active),
            0 => Ok(Self::Deleted),
            other => Err(AppError::validation(format!(
                "Invalid file status: {other}"
            ))),
        }
    }
}

/// A file-metadata record.
///
/// Field names are serialized in camelCase so the persisted JSON layout
/// and the remote wire format stay byte-compatible with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique identifier, immutable once assigned.
    pub id: FileId,
    /// Store-assigned, collision-resistant file name.
    pub file_name: String,
    /// Caller-supplied original file name.
    pub original_name: String,
    /// Category derived from extension/MIME at creation time.
    pub file_type: FileType,
    /// Opaque locator understood only by the backend (data URI or path).
    pub file_url: String,
    /// Payload size in bytes.
    pub file_size: u64,
    /// Creation timestamp; the sole sort key for listings.
    pub upload_time: DateTime<Utc>,
    /// Owner identity, set at creation from caller context.
    pub user_id: String,
    /// Descriptive source platform, no invariant.
    pub platform: String,
    /// Lifecycle status.
    pub status: FileStatus,
    /// Thumbnail locator, present only for images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl FileRecord {
    /// Whether the record is visible to queries.
    pub fn is_active(&self) -> bool {
        self.status == FileStatus::Active
    }

    /// Mark the record soft-deleted. One-way; never undone.
    pub fn mark_deleted(&mut self) {
        self.status = FileStatus::Deleted;
    }
}
