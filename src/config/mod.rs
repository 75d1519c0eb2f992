//! Run configuration loaded from a JSON file in the working directory.

use crate::error::{BuildError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "npm-bundle.json";

/// Output directory used when `outDir` is absent.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Fully defaulted run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// npm package name (e.g. `left-pad`, `@scope/pkg`)
    pub package: String,

    /// Requested version or dist-tag; `None` means `latest`
    pub version: Option<String>,

    /// Output directory, relative to the working directory unless absolute
    pub out_dir: PathBuf,

    /// Leave bare package imports unbundled
    pub externalize_bare_imports: bool,
}

impl Config {
    /// Builds a config for `package` with every optional field defaulted.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            externalize_bare_imports: true,
        }
    }

    /// The requested version trimmed, or `None` when absent or blank.
    pub fn requested_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Load and validate the config file at `path`.
///
/// Unreadable files yield [`BuildError::ConfigNotFound`]; malformed JSON,
/// a missing `package` or mistyped optional fields yield
/// [`BuildError::ConfigInvalid`].
pub fn load_config(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path).map_err(|source| BuildError::ConfigNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&raw, path)?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Parse config text; `path` is only used in error messages.
pub fn parse_config(raw: &str, path: &Path) -> Result<Config> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| BuildError::config_invalid(path, format!("not valid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| BuildError::config_invalid(path, "top level must be a JSON object"))?;

    let package = match object.get("package") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
        Some(Value::String(_)) => {
            return Err(BuildError::config_invalid(path, "'package' must not be empty"));
        }
        Some(Value::Null) | None => {
            return Err(BuildError::config_invalid(path, "missing required field 'package'"));
        }
        Some(_) => {
            return Err(BuildError::config_invalid(path, "'package' must be a string"));
        }
    };

    let mut config = Config::new(package);

    config.version = optional_string(object.get("version"), "version", path)?;

    if let Some(out_dir) = optional_string(object.get("outDir"), "outDir", path)? {
        if !out_dir.trim().is_empty() {
            config.out_dir = PathBuf::from(out_dir);
        }
    }

    match object.get("externalizeBareImports") {
        Some(Value::Bool(flag)) => config.externalize_bare_imports = *flag,
        Some(Value::Null) | None => {}
        Some(_) => {
            return Err(BuildError::config_invalid(
                path,
                "'externalizeBareImports' must be a boolean",
            ));
        }
    }

    Ok(config)
}

fn optional_string(value: Option<&Value>, field: &str, path: &Path) -> Result<Option<String>> {
    match value {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(BuildError::config_invalid(
            path,
            format!("'{}' must be a string", field),
        )),
    }
}
