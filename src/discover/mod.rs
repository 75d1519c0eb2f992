//! HTML entry point discovery inside an extracted package.

use crate::bundler::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory name npm tarballs wrap their contents in.
pub const PACKAGE_DIR: &str = "package";

/// Installed-dependency directory that is never searched.
pub const VENDOR_DIR: &str = "node_modules";

/// Root of the package inside `extract_dir`.
///
/// npm tarballs put everything under `package/`; archives without that
/// wrapper are walked from the extraction directory itself.
pub fn package_root(extract_dir: &Path) -> PathBuf {
    let wrapped = extract_dir.join(PACKAGE_DIR);
    if wrapped.is_dir() {
        wrapped
    } else {
        log::debug!(
            "No {}/ directory in archive, using {} as package root",
            PACKAGE_DIR,
            extract_dir.display()
        );
        extract_dir.to_path_buf()
    }
}

/// Whether `path` names an HTML document (`.htm`/`.html`, any case).
pub fn is_html_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

fn is_vendor_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VENDOR_DIR
}

/// Collect HTML files under `root` in traversal order.
///
/// Symlinks are not followed and `node_modules` subtrees are pruned at
/// any depth. The result is not sorted.
pub fn discover_entries(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_vendor_dir(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_html_path(entry.path()) {
            entries.push(entry.into_path());
        }
    }

    log::debug!("Found {} HTML entries under {}", entries.len(), root.display());
    Ok(entries)
}
