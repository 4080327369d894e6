//! HTTP download transport for the nexbow Nexus resolver
//!
//! This crate provides the two download primitives the resolver needs:
//! fetching a remote resource fully into memory as text, and streaming it
//! to a local file. Both make a single attempt and surface failures
//! verbatim; retry policy is the host's concern.

pub mod client;

// Re-export main types
pub use client::HttpTransport;

use nexbow_core::error::NexbowError;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, NexbowError>;
