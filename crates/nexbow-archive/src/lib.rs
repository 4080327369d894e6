//! Archive extraction for the nexbow Nexus resolver
//!
//! This crate unpacks the gzip-compressed tar archives Nexus serves for
//! package downloads. Extraction lands in a fresh temporary directory,
//! and a directory-listing diff decides whether a single wrapping folder
//! should be unwrapped so the host sees the package root directly.

pub mod extract;

// Re-export main types
pub use extract::{extract_tar_gz, list_entries, resolve_extracted_path};

use nexbow_core::error::NexbowError;

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, NexbowError>;
