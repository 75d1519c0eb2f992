//! Command line argument parsing.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::CliError;
use crate::registry::DEFAULT_REGISTRY;
use clap::{Parser, error::ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;

/// Build the HTML pages of an npm package into a static site
#[derive(Parser, Debug)]
#[command(
    name = "npm_site_bundler",
    version,
    about = "Build the HTML pages of an npm package into a static site",
    long_about = "Downloads an npm package tarball, extracts it and runs Vite over every \
HTML file in it, writing a static build to the configured output directory.

The package is read from a JSON config file (default: npm-bundle.json):

  { \"package\": \"left-pad\", \"version\": \"1.3.0\", \"outDir\": \"dist\",
    \"externalizeBareImports\": true }

Exit code 0 = build written to outDir."
)]
pub struct Args {
    /// Path of the JSON config file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// npm registry base URL
    #[arg(long, value_name = "URL", env = "NPM_CONFIG_REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub registry: String,

    /// npx executable used to run the bundler (default: npx on PATH)
    #[arg(long, value_name = "PATH", env = "NPM_SITE_BUNDLER_NPX")]
    pub bundler_command: Option<PathBuf>,

    /// Keep the temporary download/extraction directory after a successful build
    #[arg(long)]
    pub keep_temp: bool,

    /// Print extra detail lines
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    ///
    /// `--help` and `--version` print and exit 0; any other parse failure
    /// becomes [`CliError::InvalidArguments`].
    pub fn parse_args() -> Result<Self, CliError> {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse arguments from an explicit iterator, the first item being the binary name
    pub fn parse_args_from<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => CliError::InvalidArguments {
                reason: e.render().to_string().trim().to_string(),
            },
        })
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.registry.trim().is_empty() {
            return Err("Registry URL cannot be empty".to_string());
        }
        if self.config.as_os_str().is_empty() {
            return Err("Config path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
    keep_temp: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
            keep_temp: args.keep_temp,
        }
    }
}

impl RuntimeConfig {
    /// Creates a runtime config directly (library and test use).
    pub fn new(output: super::OutputManager, keep_temp: bool) -> Self {
        Self { output, keep_temp }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether the temporary directory survives a successful run
    pub fn keep_temp(&self) -> bool {
        self.keep_temp
    }
}
