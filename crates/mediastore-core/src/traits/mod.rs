//! Seam traits implemented by the storage and service crates.

pub mod backend;
pub mod payload_store;
pub mod record_store;

pub use backend::{FileBackend, ListQuery, StorageInfo, UploadRequest};
pub use payload_store::{PayloadStore, StoredPayload};
pub use record_store::RecordStore;
