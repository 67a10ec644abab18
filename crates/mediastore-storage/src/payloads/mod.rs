//! Payload store implementations.

pub mod data_uri;
