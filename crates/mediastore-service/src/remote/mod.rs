//! The remote backend: an HTTP client for a remote file service.

pub mod client;

pub use client::RemoteClient;
