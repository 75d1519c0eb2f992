//! External tool detection and availability checking.
//!
//! The bundler runs on Node.js through `npx`; this module finds it once per
//! process and caches the answer.

use std::path::PathBuf;
use std::sync::LazyLock;

/// Location of `npx`, if it is on PATH and answers `--version`.
///
/// Cached result to avoid repeated subprocess calls. The first read runs
/// `npx --version` synchronously, so async callers should make it from the
/// blocking pool.
pub static NPX: LazyLock<Option<PathBuf>> = LazyLock::new(|| match which::which("npx") {
    Ok(path) => {
        log::debug!("Found npx at: {}", path.display());

        match std::process::Command::new(&path).arg("--version").output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                log::info!("✓ npx available: {}", version.trim());
                Some(path)
            }
            Ok(output) => {
                log::warn!(
                    "npx found at {} but --version check failed (exit code: {:?}). \
                     Stderr: {}",
                    path.display(),
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
                None
            }
            Err(e) => {
                log::warn!(
                    "npx found at {} but failed to execute: {}. Check file permissions.",
                    path.display(),
                    e
                );
                None
            }
        }
    }
    Err(e) => {
        log::debug!("npx not found in PATH: {}", e);
        None
    }
});
