//! Domain types shared across all MediaStore crates.

pub mod batch;
pub mod envelope;
pub mod file_type;
pub mod id;
pub mod pagination;
pub mod progress;
pub mod record;

pub use batch::BatchDeleteOutcome;
pub use envelope::Envelope;
pub use file_type::{FileType, TypeFilter};
pub use id::FileId;
pub use pagination::{FilePage, PageRequest};
pub use progress::{ProgressSink, UploadProgress};
pub use record::{FileRecord, FileStatus};
