//! Vite backend.
//!
//! Writes a generated `vite.config.mjs` next to the extracted package and
//! runs `npx --yes vite build` against it from the package root.

use super::{backend::BundleBackend, template::VITE_CONFIG_TEMPLATE, tool_detection::NPX};
use crate::bundler::{
    Settings,
    error::{Error, ErrorExt, Result},
    externals::{HTML_PATH_PATTERN, LOCAL_SPECIFIER_PATTERN},
};
use handlebars::Handlebars;
use serde_json::json;
use std::path::{Path, PathBuf};

/// File name of the generated config.
pub const CONFIG_FILE_NAME: &str = "vite.config.mjs";

/// Bundles with Vite, fetched on demand by `npx`.
#[derive(Debug, Clone)]
pub struct ViteBackend {
    npx: PathBuf,
    config_dir: PathBuf,
}

impl ViteBackend {
    /// Creates a backend using `npx` at the given path.
    ///
    /// The generated config is written into `config_dir`.
    pub fn new(npx: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            npx: npx.into(),
            config_dir: config_dir.into(),
        }
    }

    /// Creates a backend, using `npx_override` or else the `npx` on PATH.
    pub fn locate(config_dir: impl Into<PathBuf>, npx_override: Option<PathBuf>) -> Result<Self> {
        let npx = match npx_override {
            Some(path) => path,
            None => NPX.clone().ok_or_else(|| {
                Error::GenericError(
                    "npx not found. Please install Node.js (https://nodejs.org) \
                     or pass --bundler-command"
                        .into(),
                )
            })?,
        };
        Ok(Self::new(npx, config_dir))
    }

    /// [`ViteBackend::locate`] on the blocking pool, since the first `npx`
    /// lookup runs a subprocess.
    pub async fn discover(
        config_dir: impl Into<PathBuf>,
        npx_override: Option<PathBuf>,
    ) -> Result<Self> {
        let config_dir = config_dir.into();
        tokio::task::spawn_blocking(move || Self::locate(config_dir, npx_override)).await?
    }

    /// Path the config is written to.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

/// Render the Vite config for `settings`.
pub fn render_config(settings: &Settings) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let output = settings.output();
    let input: Vec<String> = settings
        .entries()
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();

    let data = json!({
        "externalize_bare_imports": settings.import_policy().externalize_bare_imports(),
        "local_specifier_pattern": serde_json::to_string(LOCAL_SPECIFIER_PATTERN)?,
        "html_path_pattern": serde_json::to_string(HTML_PATH_PATTERN)?,
        "root": json_path(settings.root())?,
        "out_dir": json_path(settings.out_dir())?,
        "empty_out_dir": output.empty_out_dir,
        "source_map": output.source_map,
        "css_code_split": output.css_code_split,
        "manifest": output.manifest,
        "module_preload": output.module_preload,
        "has_input": !input.is_empty(),
        "input": serde_json::to_string(&input)?,
        "entry_file_names": serde_json::to_string(output.entry_file_names)?,
        "chunk_file_names": serde_json::to_string(output.chunk_file_names)?,
        "asset_file_names": serde_json::to_string(output.asset_file_names)?,
    });

    Ok(handlebars.render_template(VITE_CONFIG_TEMPLATE, &data)?)
}

fn json_path(path: &Path) -> Result<String> {
    Ok(serde_json::to_string(&path.to_string_lossy())?)
}

impl BundleBackend for ViteBackend {
    fn name(&self) -> &str {
        "vite"
    }

    async fn bundle(&self, settings: &Settings) -> Result<()> {
        let config = render_config(settings)?;
        let config_path = self.config_path();

        tokio::fs::create_dir_all(&self.config_dir)
            .await
            .fs_context("creating bundler config directory", &self.config_dir)?;
        tokio::fs::write(&config_path, config)
            .await
            .fs_context("writing bundler config", &config_path)?;

        log::info!(
            "Running {} vite build --config {}",
            self.npx.display(),
            config_path.display()
        );

        let status = tokio::process::Command::new(&self.npx)
            .arg("--yes")
            .args(["vite", "build", "--config"])
            .arg(&config_path)
            .current_dir(settings.root())
            .status()
            .await
            .map_err(|e| Error::CommandFailed {
                command: "npx vite build".to_string(),
                error: e,
            })?;

        if !status.success() {
            crate::bail!("vite build failed with exit code: {:?}", status.code());
        }

        Ok(())
    }
}
