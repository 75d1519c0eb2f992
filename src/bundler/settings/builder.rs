//! Builder for constructing Settings.

use super::{OutputOptions, Settings};
use crate::bundler::externals::ImportPolicy;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use npm_site_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> npm_site_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .root("/tmp/npm-site-bundler-1234/extract/package")
///     .out_dir("dist")
///     .entries(vec!["/tmp/npm-site-bundler-1234/extract/package/index.html".into()])
///     .externalize_bare_imports(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    root: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    entries: Vec<PathBuf>,
    import_policy: ImportPolicy,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package root the bundler runs in.
    ///
    /// # Required
    pub fn root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory. Relative paths resolve against the
    /// current working directory, not the package root.
    ///
    /// # Required
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the HTML entry points.
    ///
    /// Default: Empty (bundler default entry)
    pub fn entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.entries = entries;
        self
    }

    /// Toggles externalization of bare package imports.
    ///
    /// Default: true
    pub fn externalize_bare_imports(mut self, enabled: bool) -> Self {
        self.import_policy = ImportPolicy::new(enabled);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` or `out_dir` is missing, or if either
    /// cannot be made absolute.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::{Context, ErrorExt};

        let root = self.root.context("root is required")?;
        let out_dir = self.out_dir.context("out_dir is required")?;

        let root = root
            .absolutize()
            .fs_context("resolving package root", &root)?
            .into_owned();
        let out_dir = out_dir
            .absolutize()
            .fs_context("resolving output directory", &out_dir)?
            .into_owned();

        Ok(Settings::new(
            root,
            self.entries,
            out_dir,
            self.import_policy,
            OutputOptions::default(),
        ))
    }
}
