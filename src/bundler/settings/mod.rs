//! Configuration handed to the bundler backend.
//!
//! [`Settings`] fixes everything the backend sees: where the package lives,
//! which HTML files are entries, where output goes, which imports stay
//! external, and the output toggles in [`OutputOptions`].

mod builder;
mod core;
mod output;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use output::OutputOptions;
