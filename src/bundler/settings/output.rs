//! Fixed output options of a static build.

use crate::bundler::naming;

/// Output toggles and naming patterns passed to the backend.
///
/// The defaults are the only configuration this tool ever uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Let the bundler wipe the output dir itself (already done beforehand)
    pub empty_out_dir: bool,
    pub source_map: bool,
    /// Emit one stylesheet per async chunk instead of a single CSS file
    pub css_code_split: bool,
    pub manifest: bool,
    /// Inject the module-preload polyfill and `<link rel="modulepreload">`
    pub module_preload: bool,
    pub entry_file_names: &'static str,
    pub chunk_file_names: &'static str,
    pub asset_file_names: &'static str,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            empty_out_dir: false,
            source_map: false,
            css_code_split: true,
            manifest: false,
            module_preload: false,
            entry_file_names: naming::ENTRY_FILE_PATTERN,
            chunk_file_names: naming::CHUNK_FILE_PATTERN,
            asset_file_names: naming::ASSET_FILE_PATTERN,
        }
    }
}
