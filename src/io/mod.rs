//! I/O module
//!
//! Persistence of the inventory to disk:
//! - `json_format` - Pure encoding/decoding of the data file contents
//! - `json_store` - File-backed implementation of [`Persistence`](crate::core::Persistence)

pub mod json_format;
pub mod json_store;

pub use json_store::JsonFileStore;
