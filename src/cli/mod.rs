//! Command line interface for npm_site_bundler.
//!
//! Parses arguments, loads the config file and drives one
//! [`Pipeline`](crate::pipeline::Pipeline) run.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::ViteBackend;
use crate::config::load_config;
use crate::error::{CliError, Result};
use crate::pipeline::{Pipeline, new_work_dir};
use crate::registry::RegistryClient;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args()?;
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime = RuntimeConfig::from(&args);

    // Config errors must surface before any network or tool lookup.
    let config = load_config(&args.config)?;

    let registry = RegistryClient::new(reqwest::Client::new(), &args.registry)?;
    let work_dir = new_work_dir();
    let backend = ViteBackend::discover(&work_dir, args.bundler_command.clone()).await?;

    log::debug!("Work directory: {}", work_dir.display());

    let pipeline = Pipeline::new(registry, backend, work_dir, runtime);
    let summary = pipeline.run(&config).await?;

    log::debug!("Build summary: {:?}", summary);
    Ok(0)
}
