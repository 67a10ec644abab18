//! The local backend: query and mutation engines over a record store.

pub mod query;
pub mod service;
pub mod upload;

pub use service::FileService;
