//! Error types for the fetch-and-build pipeline.
//!
//! Every failure is fatal: errors propagate to `main`, which prints the
//! message and its cause chain and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for all pipeline stages
#[derive(Error, Debug)]
pub enum BuildError {
    /// Config file could not be read
    #[error("Config file not found or unreadable: {}", path.display())]
    ConfigNotFound {
        /// Path that was tried
        path: PathBuf,
        /// Underlying read error
        #[source]
        source: std::io::Error,
    },

    /// Config file parsed but a field is missing or has the wrong type
    #[error("Invalid config {}: {reason}", path.display())]
    ConfigInvalid {
        /// Path of the offending file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// Registry metadata request returned a non-2xx status
    #[error("Registry unreachable for '{package}': {status} {reason}")]
    RegistryUnreachable {
        /// Package that was queried
        package: String,
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// Resolved version has no distributable archive
    #[error("No tarball found for {package}@{version}")]
    TarballNotFound {
        /// Package name
        package: String,
        /// Version (or tag) that failed to resolve
        version: String,
    },

    /// Tarball request returned a non-2xx status
    #[error("Download failed for {url}: {status} {reason}")]
    DownloadFailed {
        /// Tarball URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// Downloaded bytes do not match the registry checksum
    #[error("Integrity check failed for {url}: expected {expected}, got {actual}")]
    IntegrityMismatch {
        /// Tarball URL
        url: String,
        /// Checksum advertised by the registry
        expected: String,
        /// Checksum of the downloaded bytes
        actual: String,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL construction errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Extraction and bundling errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BuildError {
    /// Shorthand for [`BuildError::ConfigInvalid`].
    pub fn config_invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Renders the error followed by every `source()` in its chain.
    pub fn report(&self) -> String {
        let mut out = format!("Error: {}", self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(&format!("\n  Caused by: {}", cause));
            source = cause.source();
        }
        out
    }
}
