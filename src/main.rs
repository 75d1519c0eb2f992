//! npm_site_bundler - builds the HTML pages of an npm package into a static site.
//!
//! Resolves the package on the registry, downloads and extracts its tarball,
//! and runs Vite over every HTML file it contains.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match npm_site_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{}", e.report());
            1
        }
    };

    process::exit(exit_code);
}
