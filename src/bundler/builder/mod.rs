//! Build orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that prepares the
//! output directory, hands [`Settings`](crate::bundler::Settings) to a
//! [`BundleBackend`] and reports what was written.
//!
//! # Example
//!
//! ```no_run
//! use npm_site_bundler::bundler::{Bundler, SettingsBuilder, ViteBackend};
//!
//! # async fn example() -> npm_site_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .root("/tmp/extract/package")
//!     .out_dir("dist")
//!     .build()?;
//!
//! let bundler = Bundler::new(ViteBackend::locate("/tmp/work", None)?);
//! let report = bundler.build(&settings).await?;
//! println!("{} files in {}", report.files.len(), report.out_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`backend`] - The [`BundleBackend`] seam
//! - [`orchestrator`] - Main [`Bundler`] struct and [`BuildReport`]
//! - [`template`] - Bundler config template
//! - [`tool_detection`] - External tool availability checking
//! - [`vite`] - Vite backend run through `npx`

pub mod backend;
mod orchestrator;
mod template;
pub mod tool_detection;
mod vite;

pub use backend::BundleBackend;
pub use orchestrator::{BuildReport, Bundler};
pub use vite::{CONFIG_FILE_NAME, ViteBackend, render_config};
