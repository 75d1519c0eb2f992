//! The fetch → extract → discover → build run.
//!
//! Stages run strictly one after another; the first failure ends the run
//! and leaves the temporary directory and any partial output in place.

use crate::{
    archive,
    bundler::{BundleBackend, Bundler, SettingsBuilder, utils},
    cli::RuntimeConfig,
    config::Config,
    discover,
    error::Result,
    registry::RegistryClient,
};
use std::path::{Path, PathBuf};

/// File name of the downloaded tarball inside the work directory.
pub const ARCHIVE_FILE_NAME: &str = "package.tgz";

/// Directory the tarball is unpacked into, inside the work directory.
pub const EXTRACT_DIR_NAME: &str = "extract";

/// Fresh per-run temporary directory under the system temp dir.
pub fn new_work_dir() -> PathBuf {
    std::env::temp_dir().join(format!("npm-site-bundler-{}", uuid::Uuid::new_v4()))
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub package: String,
    pub version: String,
    pub out_dir: PathBuf,
    pub entries: usize,
    pub files: Vec<PathBuf>,
}

/// One configured run of the tool.
pub struct Pipeline<B> {
    registry: RegistryClient,
    bundler: Bundler<B>,
    work_dir: PathBuf,
    runtime: RuntimeConfig,
}

impl<B: BundleBackend> Pipeline<B> {
    /// `work_dir` must not exist yet; it is created by [`Pipeline::run`].
    pub fn new(
        registry: RegistryClient,
        backend: B,
        work_dir: PathBuf,
        runtime: RuntimeConfig,
    ) -> Self {
        Self {
            registry,
            bundler: Bundler::new(backend),
            work_dir,
            runtime,
        }
    }

    /// Temporary directory of this run.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Execute every stage for `config`.
    pub async fn run(&self, config: &Config) -> Result<BuildSummary> {
        let out = self.runtime.output();

        // 1. Resolve
        out.section(&format!("📦 {}", config.package))?;
        out.progress(&format!(
            "Resolving {}@{}",
            config.package,
            config.requested_version().unwrap_or(crate::registry::LATEST_TAG)
        ))?;
        let release = self
            .registry
            .resolve(&config.package, config.requested_version())
            .await?;
        out.indent(&format!("version {}", release.version))?;

        // 2. Download
        out.progress(&format!("Downloading {}", release.tarball_url))?;
        let data = utils::http::download(self.registry.http(), &release.tarball_url).await?;
        utils::http::verify_release_integrity(&release, &data)?;
        out.verbose(&format!("{} bytes", data.len()))?;

        // 3. Extract
        tokio::fs::create_dir_all(&self.work_dir).await?;
        let archive_path = self.work_dir.join(ARCHIVE_FILE_NAME);
        tokio::fs::write(&archive_path, &data).await?;

        let extract_dir = self.work_dir.join(EXTRACT_DIR_NAME);
        out.progress(&format!("Extracting into {}", extract_dir.display()))?;
        let extracted = archive::extract_tarball(data, &extract_dir).await?;
        out.verbose(&format!(
            "{} files, {} directories, {} skipped entries",
            extracted.files, extracted.directories, extracted.skipped
        ))?;

        // 4. Discover
        let root = discover::package_root(&extracted.dir);
        let entries = {
            let root = root.clone();
            tokio::task::spawn_blocking(move || discover::discover_entries(&root))
                .await
                .map_err(crate::bundler::Error::from)??
        };
        if entries.is_empty() {
            out.warn(&format!(
                "No .html/.htm entries found in {}; building with the bundler's default entry",
                root.display()
            ))?;
        } else {
            for entry in &entries {
                out.verbose(&format!(
                    "entry {}",
                    entry.strip_prefix(&root).unwrap_or(entry).display()
                ))?;
            }
        }

        // 5. Build
        let settings = SettingsBuilder::new()
            .root(&root)
            .out_dir(&config.out_dir)
            .entries(entries.clone())
            .externalize_bare_imports(config.externalize_bare_imports)
            .build()?;
        out.progress(&format!(
            "Building {} entries into {} with {}",
            entries.len(),
            settings.out_dir().display(),
            self.bundler.backend().name()
        ))?;
        let report = self.bundler.build(&settings).await?;
        for asset in report.assets() {
            out.verbose(&format!("wrote {}", asset.display()))?;
        }

        if self.runtime.keep_temp() {
            out.verbose(&format!("Keeping {}", self.work_dir.display()))?;
        } else {
            utils::fs::remove_dir_all(&self.work_dir).await?;
        }

        out.success(&format!(
            "Built {}@{} → {} ({} files, {} under {}/)",
            config.package,
            release.version,
            report.out_dir.display(),
            report.files.len(),
            report.assets().count(),
            crate::bundler::naming::ASSETS_DIR
        ))?;

        Ok(BuildSummary {
            package: config.package.clone(),
            version: release.version,
            out_dir: report.out_dir,
            entries: entries.len(),
            files: report.files,
        })
    }
}
