//! Host-supplied configuration and credential handling.
//!
//! The host package manager passes its configuration object at resolver
//! construction. Only the optional `nexus` section is meaningful here;
//! everything else in the host config is ignored.

use serde::Deserialize;

/// Configuration the host supplies when constructing the resolver
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolverConfig {
    /// Optional `nexus` section carrying registry credentials
    #[serde(default)]
    pub nexus: Option<NexusConfig>,
}

/// The `nexus` configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Username/password pair embedded into endpoint URLs.
///
/// A value of this type only exists when both halves are present and
/// non-empty, so a single-sided credential can never leak into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl ResolverConfig {
    /// Credentials for endpoint URLs, if the host configured a complete pair
    pub fn credentials(&self) -> Option<Credentials> {
        let nexus = self.nexus.as_ref()?;
        match (nexus.username.as_deref(), nexus.password.as_deref()) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credentials {
                    username: username.to_string(),
                    password: password.to_string(),
                })
            }
            _ => None,
        }
    }
}
