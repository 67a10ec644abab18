//! # mediastore-core
//!
//! Core crate for MediaStore. Contains the seam traits, configuration
//! schemas, domain types (records, pagination, response envelope),
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other MediaStore crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
