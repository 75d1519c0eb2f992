//! File system utilities for extraction and output handling.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Empties `path` without removing it, creating it when missing.
///
/// Every direct child is removed (directories recursively); the directory
/// itself and its permissions survive.
pub async fn empty_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating output directory", path)?;

    let mut entries = fs::read_dir(path)
        .await
        .fs_context("reading output directory", path)?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading output directory", path)?
    {
        let child = entry.path();
        let file_type = entry
            .file_type()
            .await
            .fs_context("inspecting output entry", &child)?;

        if file_type.is_dir() {
            fs::remove_dir_all(&child)
                .await
                .fs_context("removing output directory entry", &child)?;
        } else {
            fs::remove_file(&child)
                .await
                .fs_context("removing output file", &child)?;
        }
    }

    Ok(())
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Lists every regular file under `root`, relative to it, sorted.
pub async fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let root = root.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&root).follow_links(false) {
            let entry = entry?;
            if entry.file_type().is_file() {
                if let Ok(rel) = entry.path().strip_prefix(&root) {
                    files.push(rel.to_path_buf());
                }
            }
        }
        files.sort();
        Ok::<_, crate::bundler::Error>(files)
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_dir_keeps_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        std::fs::create_dir_all(out.join("assets/nested")).unwrap();
        std::fs::write(out.join("index.html"), "old").unwrap();
        std::fs::write(out.join("assets/nested/a.js"), "old").unwrap();

        empty_dir(&out).await.unwrap();

        assert!(out.is_dir());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn empty_dir_creates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("a/b");
        empty_dir(&out).await.unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn list_files_is_relative_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("assets")).unwrap();
        std::fs::write(tmp.path().join("index.html"), "").unwrap();
        std::fs::write(tmp.path().join("assets/main.js"), "").unwrap();

        let files = list_files(tmp.path()).await.unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("assets/main.js"), PathBuf::from("index.html")]
        );
    }

    #[tokio::test]
    async fn remove_missing_dir_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        remove_dir_all(&tmp.path().join("nope")).await.unwrap();
    }
}
