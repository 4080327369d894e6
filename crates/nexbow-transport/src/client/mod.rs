//! HTTP client implementation for text and file downloads

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use nexbow_core::error::NexbowError;

use crate::TransportResult;

/// HTTP(S) transport for Nexus endpoints.
///
/// Wraps a pooled `reqwest` client. Every download is a single attempt:
/// a non-2xx status becomes a `DownloadStatus` error with the exact
/// `"<url> (HTTP <code>)"` message, and a connection-level failure keeps
/// the native error text untouched.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Underlying HTTP client with connection pooling
    client: Client,
}

impl HttpTransport {
    /// Create a new transport with connection pooling
    pub fn new() -> TransportResult<Self> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .user_agent("nexbow/0.1.0")
            .build()
            .map_err(NexbowError::network)?;

        Ok(Self { client })
    }

    /// Download a resource fully into memory and decode it as text
    pub async fn download_text(&self, url: &str) -> TransportResult<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(NexbowError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NexbowError::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(NexbowError::network)
    }

    /// Stream a resource to a local file, resolving with the same path.
    ///
    /// The status line is checked before any bytes are written, so a
    /// non-2xx response never leaves a partial file behind.
    pub async fn download_to_file(&self, url: &str, destination: &Path) -> TransportResult<PathBuf> {
        debug!("GET {} -> {}", url, destination.display());
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(NexbowError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NexbowError::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = tokio::fs::File::create(destination).await.map_err(|e| {
            NexbowError::io(
                format!("Failed to create download file {}", destination.display()),
                e,
            )
        })?;

        while let Some(chunk) = response.chunk().await.map_err(NexbowError::network)? {
            file.write_all(&chunk).await.map_err(|e| {
                NexbowError::io(
                    format!("Failed to write download file {}", destination.display()),
                    e,
                )
            })?;
        }

        file.flush().await.map_err(|e| {
            NexbowError::io(
                format!("Failed to flush download file {}", destination.display()),
                e,
            )
        })?;

        Ok(destination.to_path_buf())
    }
}

#[cfg(test)]
mod tests;
