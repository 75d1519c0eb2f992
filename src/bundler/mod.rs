//! Static-site build subsystem.
//!
//! Everything between "package extracted" and "output written": the fixed
//! build [`Settings`], the import externalization policy, output naming,
//! the [`Bundler`] orchestrator and its [`BundleBackend`] implementations.

pub mod builder;
pub mod error;
pub mod externals;
pub mod naming;
pub mod settings;
pub mod utils;

pub use builder::{BuildReport, BundleBackend, Bundler, ViteBackend};
pub use error::{Error, Result};
pub use externals::ImportPolicy;
pub use settings::{OutputOptions, Settings, SettingsBuilder};
