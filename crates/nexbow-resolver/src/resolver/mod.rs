//! The four-operation resolver facade.
//!
//! Orchestrates the URL codec, the download transport and the archive
//! extractor behind the match / locate / releases / fetch contract the
//! host package manager calls into. Each operation is an independent
//! transaction; nothing persists across calls.

use tracing::{debug, info};

use nexbow_archive::extract_tar_gz;
use nexbow_core::config::ResolverConfig;
use nexbow_core::error::NexbowError;
use nexbow_core::types::{CachedPackage, FetchResult, PackageEndpoint, Release};
use nexbow_transport::HttpTransport;

use crate::url;
use crate::ResolverResult;

/// The capability contract the host expects of any resolver it loads
#[allow(async_fn_in_trait)]
pub trait Resolver {
    /// Whether this resolver recognizes the given source URL
    fn matches(&self, url: &str) -> bool;

    /// Canonical locator for a recognized source URL
    fn locate<'a>(&self, url: &'a str) -> &'a str;

    /// All installable releases of the package behind a source URL
    async fn releases(&self, source: &str) -> ResolverResult<Vec<Release>>;

    /// Download and extract one version, or `None` on a cache hit
    async fn fetch(
        &self,
        endpoint: &PackageEndpoint,
        cached: Option<&CachedPackage>,
    ) -> ResolverResult<Option<FetchResult>>;
}

/// Resolver for packages hosted in a Nexus repository manager
#[derive(Debug, Clone)]
pub struct NexusResolver {
    config: ResolverConfig,
    transport: HttpTransport,
}

impl NexusResolver {
    /// Create a resolver from the host-supplied configuration
    pub fn new(config: ResolverConfig) -> ResolverResult<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self { config, transport })
    }
}

impl Resolver for NexusResolver {
    fn matches(&self, url: &str) -> bool {
        url::matches(url)
    }

    fn locate<'a>(&self, url: &'a str) -> &'a str {
        url::locate(url)
    }

    async fn releases(&self, source: &str) -> ResolverResult<Vec<Release>> {
        let coordinates = url::parse_nexus_url(source)?;
        let credentials = self.config.credentials();
        let endpoint = url::versions_endpoint(&coordinates, credentials.as_ref());

        let body = self.transport.download_text(&endpoint).await?;
        let releases = parse_versions(&body)?;
        debug!(
            "Found {} releases for {}",
            releases.len(),
            coordinates.package_name
        );
        Ok(releases)
    }

    async fn fetch(
        &self,
        endpoint: &PackageEndpoint,
        cached: Option<&CachedPackage>,
    ) -> ResolverResult<Option<FetchResult>> {
        // Cache short-circuit: same version already held by the host,
        // nothing to do and no network activity.
        if let Some(cached) = cached {
            if cached.version == endpoint.target {
                debug!("Version {} already cached, skipping fetch", endpoint.target);
                return Ok(None);
            }
        }

        let coordinates = url::parse_nexus_url(&endpoint.source)?;
        let credentials = self.config.credentials();
        let archive_url =
            url::archive_endpoint(&coordinates, credentials.as_ref(), &endpoint.target);

        // The downloaded archive only needs to live until extraction
        // completes; the extracted tree is what the host takes over.
        let archive_file = tempfile::Builder::new()
            .prefix("nexbow-")
            .suffix(".tar.gz")
            .tempfile()
            .map_err(|e| NexbowError::io("Failed to create archive file".to_string(), e))?;

        self.transport
            .download_to_file(&archive_url, archive_file.path())
            .await?;

        let temp_path = extract_tar_gz(archive_file.path())?;
        info!(
            "Fetched {} {} to {}",
            coordinates.package_name,
            endpoint.target,
            temp_path.display()
        );

        Ok(Some(FetchResult {
            temp_path,
            remove_ignores: true,
        }))
    }
}

/// Parse the Nexus version listing (a JSON array of version strings)
/// into release entries, preserving input order.
pub fn parse_versions(body: &str) -> ResolverResult<Vec<Release>> {
    let versions: Vec<String> =
        serde_json::from_str(body).map_err(|e| NexbowError::VersionsParse {
            message: e.to_string(),
        })?;

    Ok(versions.into_iter().map(Release::from_version).collect())
}
