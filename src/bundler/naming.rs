//! Output file naming: everything under `assets/`, no content hashes.

/// Directory all generated files go into, relative to the output dir.
pub const ASSETS_DIR: &str = "assets";

/// Pattern for entry chunks.
pub const ENTRY_FILE_PATTERN: &str = "assets/[name].js";

/// Pattern for shared chunks.
pub const CHUNK_FILE_PATTERN: &str = "assets/[name].js";

/// Pattern for non-script assets.
pub const ASSET_FILE_PATTERN: &str = "assets/[name][extname]";

/// Output path of the script chunk called `name`.
pub fn chunk_file_name(name: &str) -> String {
    CHUNK_FILE_PATTERN.replace("[name]", name)
}
