//! Classification of import specifiers into bundled and external.
//!
//! The regex sources below are also embedded into the generated bundler
//! config, so the Rust predicate and the one the bundler runs agree.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Specifiers that always resolve locally: `./` and `../` paths, POSIX
/// absolute paths, Windows drive paths, URL-like `scheme:` prefixes and
/// `\0`-prefixed virtual module ids.
pub const LOCAL_SPECIFIER_PATTERN: &str =
    r"^(?:\.{1,2}/|/|[A-Za-z]:[\\/]|[A-Za-z][A-Za-z0-9+.\-]*:|\x00)";

/// HTML documents (matched case-insensitively).
pub const HTML_PATH_PATTERN: &str = r"\.html?$";

static LOCAL_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LOCAL_SPECIFIER_PATTERN).unwrap_or_else(|e| panic!("invalid specifier regex: {e}"))
});

static HTML_PATH: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(HTML_PATH_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid html regex: {e}"))
});

/// True for bare package-style specifiers such as `react` or `lodash/fp`.
pub fn is_bare_specifier(id: &str) -> bool {
    !LOCAL_SPECIFIER.is_match(id) && !HTML_PATH.is_match(id)
}

/// Decides which imports the bundler leaves for the runtime to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportPolicy {
    externalize_bare_imports: bool,
}

impl ImportPolicy {
    pub fn new(externalize_bare_imports: bool) -> Self {
        Self {
            externalize_bare_imports,
        }
    }

    pub fn externalize_bare_imports(&self) -> bool {
        self.externalize_bare_imports
    }

    /// Whether `id` stays unbundled.
    pub fn is_external(&self, id: &str) -> bool {
        self.externalize_bare_imports && is_bare_specifier(id)
    }
}

impl Default for ImportPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}
