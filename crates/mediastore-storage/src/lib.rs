//! # mediastore-storage
//!
//! Physical storage for MediaStore: [`RecordStore`] implementations
//! holding the persisted metadata collection, and [`PayloadStore`]
//! implementations holding the file bytes.
//!
//! [`RecordStore`]: mediastore_core::traits::RecordStore
//! [`PayloadStore`]: mediastore_core::traits::PayloadStore

pub mod payloads;
pub mod records;

pub use payloads::data_uri::DataUriPayloads;
pub use records::json_file::JsonFileStore;
pub use records::memory::MemoryStore;
