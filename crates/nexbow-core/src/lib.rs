//! # nexbow-core
//!
//! Core types and utilities shared across all nexbow crates.
//!
//! This crate provides:
//! - PackageCoordinates, Release and FetchResult types for the resolver contract
//! - Host-supplied configuration with optional Nexus credentials
//! - NexbowError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (PackageCoordinates, Release, etc.)
//! - `error`: Error types and result aliases
//! - `config`: Host configuration and credential handling

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{Credentials, NexusConfig, ResolverConfig};
pub use error::{NexbowError, NexbowResult};
pub use types::{CachedPackage, FetchResult, PackageCoordinates, PackageEndpoint, Protocol, Release};
