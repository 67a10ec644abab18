//! Record store implementations.

pub mod json_file;
pub mod memory;
