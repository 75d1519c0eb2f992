//! Fetch an npm package and build its HTML entry points into a static site.
//!
//! The run is a straight line of stages:
//! - [`config`] - load the JSON run configuration
//! - [`registry`] - resolve a version to a tarball URL
//! - [`bundler::utils::http`] - download and verify the tarball
//! - [`archive`] - stream-extract it to a temporary directory
//! - [`discover`] - find `.html`/`.htm` entry points
//! - [`bundler`] - clear the output directory and run the bundler
//!
//! [`pipeline::Pipeline`] chains them; [`cli`] is the binary's front end.

pub mod archive;
pub mod bundler;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod registry;

// Re-export commonly used types
pub use error::{BuildError, CliError, Result};
