//! File-backed persistence for the categorized map data.
//!
//! One pretty-printed JSON array per category plus `metadata.json`, all in a
//! single directory that the server reads from.

mod error;
mod files;

pub use error::StoreError;
pub use files::{read_category, read_metadata, write_output, WrittenFiles, METADATA_FILE};
