//! Core Settings struct and implementations.

use super::OutputOptions;
use crate::bundler::externals::ImportPolicy;
use std::path::{Path, PathBuf};

/// Main settings for a bundler run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which
/// validates required fields and absolutizes the output directory.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package directory the bundler runs in.
    root: PathBuf,

    /// HTML entry points, absolute, in discovery order.
    ///
    /// Empty means the bundler falls back to its own default entry.
    entries: Vec<PathBuf>,

    /// Absolute output directory.
    out_dir: PathBuf,

    /// Which imports stay unbundled.
    import_policy: ImportPolicy,

    /// Fixed output toggles and naming.
    output: OutputOptions,
}

impl Settings {
    /// Returns the package root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the HTML entry points.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Returns the absolute output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the import externalization policy.
    pub fn import_policy(&self) -> ImportPolicy {
        self.import_policy
    }

    /// Returns the output options.
    pub fn output(&self) -> &OutputOptions {
        &self.output
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        root: PathBuf,
        entries: Vec<PathBuf>,
        out_dir: PathBuf,
        import_policy: ImportPolicy,
        output: OutputOptions,
    ) -> Self {
        Self {
            root,
            entries,
            out_dir,
            import_policy,
            output,
        }
    }
}
