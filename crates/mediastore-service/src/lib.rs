//! # mediastore-service
//!
//! Business logic for MediaStore: the query and mutation engines over a
//! record store ([`file::FileService`], the local backend variant), the
//! HTTP client for a remote file service ([`remote::RemoteClient`]), and
//! startup-time backend selection ([`backend::connect`]).

pub mod backend;
mod batch;
pub mod file;
pub mod remote;
pub mod telemetry;

pub use backend::connect;
pub use file::FileService;
pub use remote::RemoteClient;
