//! Streaming extraction of gzip-compressed npm tarballs.
//!
//! Entries are handled strictly in archive order as they come out of the
//! decoder: directories are created, regular files are streamed to disk and
//! every other entry type (symlinks, hard links, devices) is skipped.

use crate::bundler::error::{Error, ErrorExt, Result};
use bytes::Bytes;
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{self, Read},
    path::{Component, Path, PathBuf},
};

/// What an extraction wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPackage {
    /// Directory the archive was unpacked into
    pub dir: PathBuf,
    /// Regular files written
    pub files: usize,
    /// Directory entries created
    pub directories: usize,
    /// Entries of other types that were ignored
    pub skipped: usize,
}

/// Unpack `data` into `dest` on the blocking pool.
///
/// `dest` is created if missing. Any entry failure aborts the extraction;
/// whatever was written up to that point stays on disk.
pub async fn extract_tarball(data: Bytes, dest: &Path) -> Result<ExtractedPackage> {
    let dest = dest.to_path_buf();
    tokio::task::spawn_blocking(move || unpack(data.as_ref(), &dest)).await?
}

/// Synchronous extraction of a `.tgz` stream into `dest`.
pub fn unpack<R: Read>(reader: R, dest: &Path) -> Result<ExtractedPackage> {
    std::fs::create_dir_all(dest).fs_context("creating extraction directory", dest)?;

    let mut extracted = ExtractedPackage {
        dir: dest.to_path_buf(),
        files: 0,
        directories: 0,
        skipped: 0,
    };

    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    let entries = archive.entries().fs_context("reading archive", dest)?;

    for entry in entries {
        let mut entry = entry.fs_context("reading archive entry", dest)?;
        let rel = entry
            .path()
            .fs_context("decoding archive entry path", dest)?
            .into_owned();
        let target = safe_join(dest, &rel)?;
        let entry_type = entry.header().entry_type();

        if entry_type.is_dir() {
            std::fs::create_dir_all(&target).fs_context("creating directory", &target)?;
            extracted.directories += 1;
        } else if entry_type.is_file() {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
            }
            let mut file = File::create(&target).fs_context("creating file", &target)?;
            io::copy(&mut entry, &mut file).fs_context("writing file", &target)?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Ok(mode) = entry.header().mode() {
                    // keep files owner read/writable whatever the header says
                    let perms = std::fs::Permissions::from_mode((mode & 0o777) | 0o600);
                    std::fs::set_permissions(&target, perms)
                        .fs_context("setting file permissions", &target)?;
                }
            }

            extracted.files += 1;
        } else {
            log::debug!("Skipping {:?} entry {}", entry_type, rel.display());
            extracted.skipped += 1;
        }
    }

    log::debug!(
        "Extracted {} files and {} directories into {} ({} skipped)",
        extracted.files,
        extracted.directories,
        dest.display(),
        extracted.skipped
    );

    Ok(extracted)
}

/// Map an archive path under `dest`, rejecting absolute and `..` paths.
fn safe_join(dest: &Path, rel: &Path) -> Result<PathBuf> {
    let mut target = dest.to_path_buf();
    for component in rel.components() {
        match component {
            Component::Normal(part) => target.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::UnsafeArchivePath(rel.to_path_buf()));
            }
        }
    }
    Ok(target)
}
