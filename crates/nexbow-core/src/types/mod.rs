//! Core data types for the Nexus resolver contract.
//!
//! This module provides the fundamental types exchanged with the host
//! package manager:
//! - PackageCoordinates identifying one package within a Nexus repository
//! - Release entries for the version listing
//! - FetchResult and the host-owned cache entry for fetch outcomes

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Transport scheme recovered from a `nexus+http(s)` URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// The concrete HTTP scheme used when building endpoint URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured coordinates identifying one package within a Nexus repository.
///
/// Derived once per URL; `repository_name` and `package_name` are the two
/// path segments immediately following the literal `repository` segment.
/// Any context path before `repository` is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCoordinates {
    pub protocol: Protocol,
    pub hostname: String,
    pub port: u16,
    pub repository_name: String,
    pub package_name: String,
}

/// One entry in the Nexus version listing.
///
/// `target` and `version` are always equal in this system: the version
/// string itself is the installable target reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub target: String,
    pub version: String,
}

impl Release {
    /// Build a release entry from a single version string
    pub fn from_version(version: String) -> Self {
        Self {
            target: version.clone(),
            version,
        }
    }
}

/// The source/target pair the host hands to `fetch`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageEndpoint {
    pub source: String,
    pub target: String,
}

/// Host-owned cache entry, read-only to the resolver.
///
/// Only `version` participates in the cache short-circuit; any other
/// fields the host stores alongside it are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CachedPackage {
    pub version: String,
}

/// Successful fetch outcome handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Extracted package root the host should take ownership of
    pub temp_path: PathBuf,
    /// Instructs the host to skip ignore-file filtering for this fetch
    pub remove_ignores: bool,
}
