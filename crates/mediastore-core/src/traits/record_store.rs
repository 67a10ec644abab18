//! Record store trait — whole-collection load/replace persistence.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::record::FileRecord;

/// Durable mapping from record id to [`FileRecord`] with
/// whole-collection load/replace semantics. There is no partial-write
/// API; mutations go through a load-modify-save cycle.
///
/// Implementations exist for a file-backed JSON collection and an
/// in-memory map. This design assumes single-writer-at-a-time access
/// per process; the service layer serializes mutation cycles.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read the full collection. A store with no data yet yields an
    /// empty collection, never a not-found error.
    async fn load_all(&self) -> AppResult<Vec<FileRecord>>;

    /// Atomically replace the entire persisted collection. A concurrent
    /// `load_all` must never observe a torn write.
    async fn save_all(&self, records: &[FileRecord]) -> AppResult<()>;
}
