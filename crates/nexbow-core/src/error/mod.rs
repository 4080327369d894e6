//! Error types and result aliases for nexbow operations.
//!
//! Provides a unified error type that covers all possible error conditions
//! across the nexbow crates. Download failures preserve the exact message
//! format the host surfaces to users, and transport errors keep the native
//! error text untouched.

use thiserror::Error;

/// Unified error type for all nexbow operations
#[derive(Error, Debug)]
pub enum NexbowError {
    // URL shape errors
    #[error("Unsupported URL scheme '{scheme}': expected nexus+http or nexus+https")]
    UnsupportedScheme { scheme: String },

    #[error("Invalid Nexus URL '{url}': {reason}")]
    UrlShape { url: String, reason: String },

    // Download errors
    #[error("{url} (HTTP {status})")]
    DownloadStatus { url: String, status: u16 },

    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Version listing errors
    #[error("Failed to parse versions listing: {message}")]
    VersionsParse { message: String },

    // Extraction errors
    #[error("Archive entry escapes extraction directory: {entry}")]
    UnsafeArchivePath { entry: String },

    // IO errors
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for nexbow operations
pub type NexbowResult<T> = Result<T, NexbowError>;

impl NexbowError {
    /// Create a network error whose message is the native error text
    pub fn network<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a URL shape error
    pub fn url_shape(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UrlShape {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_status_message_matches_host_format() {
        let err = NexbowError::DownloadStatus {
            url: "http://example.com/endpoint".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "http://example.com/endpoint (HTTP 404)");
    }

    #[test]
    fn network_error_preserves_native_text() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ENOTFOUND foo");
        let err = NexbowError::network(io);
        assert!(err.to_string().contains("ENOTFOUND"));
    }
}
