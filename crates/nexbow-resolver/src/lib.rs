//! Nexus resolver facade for a front-end package manager
//!
//! This crate implements the four-operation capability contract a host
//! package manager expects of a resolver plugin: match, locate, releases
//! and fetch. Packages are addressed with `nexus+http://` and
//! `nexus+https://` URLs pointing into a Nexus repository manager.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `url`: parsing resolver URLs into coordinates and building the two
//!   Nexus REST endpoints (with optional embedded credentials)
//! - `resolver`: the facade orchestrating transport and extraction

pub mod resolver;
pub mod url;

// Re-export main types
pub use resolver::{parse_versions, NexusResolver, Resolver};

use nexbow_core::error::NexbowError;

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, NexbowError>;
