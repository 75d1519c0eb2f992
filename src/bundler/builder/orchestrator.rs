//! Main build orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that clears the output
//! directory, delegates the build to a [`BundleBackend`] and collects what
//! ended up on disk.

use super::backend::BundleBackend;
use crate::bundler::{Result, Settings, naming, utils::fs};
use std::path::{Path, PathBuf};

/// Result of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Absolute output directory
    pub out_dir: PathBuf,
    /// Every file written, relative to `out_dir`, sorted
    pub files: Vec<PathBuf>,
}

impl BuildReport {
    /// Files under `assets/`.
    pub fn assets(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| p.starts_with(naming::ASSETS_DIR))
    }
}

/// Main build orchestrator.
///
/// Owns a backend and runs it once per [`Bundler::build`] call.
#[derive(Debug)]
pub struct Bundler<B> {
    backend: B,
}

impl<B: BundleBackend> Bundler<B> {
    /// Creates a new orchestrator around `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs one build.
    ///
    /// # Process
    ///
    /// 1. Empties the output directory (the directory itself is kept)
    /// 2. Invokes the backend with the fixed settings
    /// 3. Lists the files the backend produced
    pub async fn build(&self, settings: &Settings) -> Result<BuildReport> {
        let out_dir = settings.out_dir();

        log::debug!("Clearing output directory {}", out_dir.display());
        fs::empty_dir(out_dir).await?;

        if settings.entries().is_empty() {
            log::warn!(
                "No HTML entries given, {} will use its default entry",
                self.backend.name()
            );
        } else {
            log::info!(
                "Building {} HTML entries with {}",
                settings.entries().len(),
                self.backend.name()
            );
        }

        self.backend.bundle(settings).await?;

        let files = fs::list_files(out_dir).await?;
        if files.is_empty() {
            log::warn!("{} produced no files in {}", self.backend.name(), out_dir.display());
        }

        Ok(BuildReport {
            out_dir: out_dir.to_path_buf(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{Error, SettingsBuilder, naming::chunk_file_name};
    use std::sync::Mutex;

    /// Writes one chunk per entry and records what it was handed.
    #[derive(Default)]
    struct RecordingBackend {
        seen_entries: Mutex<Vec<PathBuf>>,
        saw_empty_out_dir: Mutex<bool>,
    }

    impl BundleBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn bundle(&self, settings: &Settings) -> Result<()> {
            let out = settings.out_dir();
            *self.saw_empty_out_dir.lock().unwrap() = std::fs::read_dir(out)?.next().is_none();
            *self.seen_entries.lock().unwrap() = settings.entries().to_vec();

            for entry in settings.entries() {
                let name = entry.file_stem().unwrap().to_string_lossy();
                let path = out.join(chunk_file_name(&name));
                std::fs::create_dir_all(path.parent().unwrap())?;
                std::fs::write(path, "export {}")?;
            }
            Ok(())
        }
    }

    struct FailingBackend;

    impl BundleBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        async fn bundle(&self, _settings: &Settings) -> Result<()> {
            Err(Error::GenericError("boom".into()))
        }
    }

    #[tokio::test]
    async fn clears_output_then_builds() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        std::fs::create_dir_all(out.join("stale")).unwrap();
        std::fs::write(out.join("stale/old.js"), "old").unwrap();
        std::fs::write(out.join("old.html"), "old").unwrap();

        let settings = SettingsBuilder::new()
            .root(tmp.path())
            .out_dir(&out)
            .entries(vec![tmp.path().join("main.html")])
            .build()
            .unwrap();

        let bundler = Bundler::new(RecordingBackend::default());
        let report = bundler.build(&settings).await.unwrap();

        assert!(*bundler.backend().saw_empty_out_dir.lock().unwrap());
        assert_eq!(
            *bundler.backend().seen_entries.lock().unwrap(),
            vec![tmp.path().join("main.html")]
        );
        assert_eq!(report.files, vec![PathBuf::from("assets/main.js")]);
        assert_eq!(report.assets().count(), 1);
        assert!(!out.join("stale").exists());
    }

    #[tokio::test]
    async fn backend_failure_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .root(tmp.path())
            .out_dir(tmp.path().join("out"))
            .build()
            .unwrap();

        let err = Bundler::new(FailingBackend).build(&settings).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
