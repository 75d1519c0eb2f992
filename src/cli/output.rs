//! Human-readable progress output.
//!
//! Not a stable format: lines are meant for people watching a terminal.

use console::{Term, style};
use std::io;

/// Writes progress, success and warning lines to stdout/stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// `quiet` suppresses everything except warnings; `verbose` enables
    /// [`OutputManager::verbose`] lines.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    /// Section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(&format!("{}", style(title).bold().cyan()))
    }

    /// Step in progress.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout
            .write_line(&format!("{} {}", style("→").blue(), message))
    }

    /// Indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(&format!("   {}", message))
    }

    /// Detail line shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.stdout.write_line(&format!("   {}", style(message).dim()))
    }

    /// Completed step.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout
            .write_line(&format!("{} {}", style("✓").green().bold(), message))
    }

    /// Non-fatal problem; shown even in quiet mode.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.stderr
            .write_line(&format!("{} {}", style("warning:").yellow().bold(), message))
    }
}
