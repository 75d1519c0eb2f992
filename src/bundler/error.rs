//! Errors raised while extracting archives and driving the bundler.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for extraction and bundling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Extraction and bundling error
#[derive(Error, Debug)]
pub enum Error {
    /// Bare IO error
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// IO error with the operation and path that caused it
    #[error("{context} ({}): {source}", path.display())]
    Fs {
        /// What was being done
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Archive entry would land outside the extraction directory
    #[error("refusing to extract unsafe archive path: {}", .0.display())]
    UnsafeArchivePath(PathBuf),

    /// External command could not be spawned
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command name
        command: String,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// Directory traversal error
    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    /// Bundler config template error
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// JSON encoding error
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Blocking task panicked or was cancelled
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with a description and the path involved.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts missing values and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Uses `msg` as the error message.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", msg, e)))
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)).into())
    };
}
