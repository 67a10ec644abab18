//! In-memory record store — the in-process key-value analogue.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mediastore_core::result::AppResult;
use mediastore_core::traits::RecordStore;
use mediastore_core::types::FileRecord;

/// Record store holding the collection in process memory.
///
/// Used by the local backend when no persistence path is configured,
/// and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<FileRecord>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load_all(&self) -> AppResult<Vec<FileRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn save_all(&self, records: &[FileRecord]) -> AppResult<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
