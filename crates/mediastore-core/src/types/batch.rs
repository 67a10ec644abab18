//! Batch delete outcome reporting.

use serde::{Deserialize, Serialize};

use crate::types::id::FileId;

/// Per-id classification of a batch delete.
///
/// The aggregate call always succeeds; callers inspect the two lists to
/// determine the actual outcome. Ids appear in the same order as the
/// input sequence, regardless of completion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchDeleteOutcome {
    /// Ids whose delete completed.
    pub success: Vec<FileId>,
    /// Ids whose delete failed, timed out, or targeted a missing record.
    pub failed: Vec<FileId>,
}

impl BatchDeleteOutcome {
    /// Whether every constituent delete succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
