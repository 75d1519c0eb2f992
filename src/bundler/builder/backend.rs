//! Seam between the orchestrator and the tool that does the bundling.

use crate::bundler::{Result, Settings};
use std::future::Future;

/// A bundler implementation driven by [`Bundler`](super::Bundler).
///
/// Implementations write the build into `settings.out_dir()`, which the
/// orchestrator has already emptied. They must not clear it again.
pub trait BundleBackend {
    /// Short name used in progress output.
    fn name(&self) -> &str;

    /// Run one build with the given settings.
    fn bundle(&self, settings: &Settings) -> impl Future<Output = Result<()>> + Send;
}
