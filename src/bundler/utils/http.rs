//! HTTP utilities for downloading package archives.
//!
//! Provides the tarball download and checksum verification against the
//! values published in registry metadata.

use crate::error::{BuildError, Result};
use crate::registry::ResolvedRelease;
use base64::Engine;
use bytes::Bytes;
use sha1::Sha1;
use sha2::{Digest, Sha512};

/// Downloads a file from a URL.
///
/// Returns the whole response body. Non-2xx responses fail with
/// [`BuildError::DownloadFailed`]; there is no retry.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Bytes> {
    log::info!("Downloading {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BuildError::DownloadFailed {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let bytes = response.bytes().await?;
    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(bytes)
}

/// Checks `data` against the release's `integrity` or, failing that, `shasum`.
///
/// Releases carrying neither are accepted unchecked.
pub fn verify_release_integrity(release: &ResolvedRelease, data: &[u8]) -> Result<()> {
    if let Some(integrity) = release.integrity.as_deref() {
        if let Some(expected) = sri_sha512(integrity) {
            let actual = base64::engine::general_purpose::STANDARD.encode(Sha512::digest(data));
            return check(&release.tarball_url, expected, &actual);
        }
        log::debug!("Unsupported integrity algorithm in '{}'", integrity);
    }

    if let Some(shasum) = release.shasum.as_deref() {
        let actual = hex::encode(Sha1::digest(data));
        return check(&release.tarball_url, &shasum.to_ascii_lowercase(), &actual);
    }

    log::debug!("No checksum published for {}", release.tarball_url);
    Ok(())
}

/// The `sha512-` digest of a subresource-integrity string.
///
/// The value may list several space-separated hashes, each optionally
/// followed by `?options`; other algorithms are ignored.
fn sri_sha512(integrity: &str) -> Option<&str> {
    integrity.split_whitespace().find_map(|token| {
        let hash = token.split_once('?').map_or(token, |(hash, _)| hash);
        hash.strip_prefix("sha512-").filter(|digest| !digest.is_empty())
    })
}

fn check(url: &str, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        log::debug!("Checksum verified for {}", url);
        Ok(())
    } else {
        Err(BuildError::IntegrityMismatch {
            url: url.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(shasum: Option<&str>, integrity: Option<&str>) -> ResolvedRelease {
        ResolvedRelease {
            version: "1.0.0".into(),
            tarball_url: "https://x/y.tgz".into(),
            shasum: shasum.map(String::from),
            integrity: integrity.map(String::from),
        }
    }

    #[test]
    fn accepts_matching_shasum() {
        // sha1("hello")
        let r = release(Some("AAF4C61DDCC5E8A2DABEDE0F3B482CD9AEA9434D"), None);
        verify_release_integrity(&r, b"hello").unwrap();
    }

    #[test]
    fn rejects_wrong_shasum() {
        let r = release(Some("0000000000000000000000000000000000000000"), None);
        assert!(matches!(
            verify_release_integrity(&r, b"hello"),
            Err(BuildError::IntegrityMismatch { .. })
        ));
    }

    #[test]
    fn integrity_takes_precedence() {
        let sri = format!(
            "sha512-{}",
            base64::engine::general_purpose::STANDARD.encode(Sha512::digest(b"hello"))
        );
        let r = release(Some("bogus"), Some(&sri));
        verify_release_integrity(&r, b"hello").unwrap();
        assert!(verify_release_integrity(&r, b"other").is_err());
    }

    #[test]
    fn multi_hash_integrity_uses_sha512() {
        let sha512 = base64::engine::general_purpose::STANDARD.encode(Sha512::digest(b"hello"));
        let sha1 = base64::engine::general_purpose::STANDARD.encode(Sha1::digest(b"hello"));

        let r = release(None, Some(&format!("sha512-{sha512} sha1-{sha1}")));
        verify_release_integrity(&r, b"hello").unwrap();

        let r = release(None, Some(&format!("sha1-{sha1}  sha512-{sha512}?foo=bar\n")));
        verify_release_integrity(&r, b"hello").unwrap();

        match verify_release_integrity(&r, b"other") {
            Err(BuildError::IntegrityMismatch { expected, .. }) => assert_eq!(expected, sha512),
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn integrity_without_sha512_falls_back_to_shasum() {
        let r = release(
            Some("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"),
            Some("sha1-qvTGHdzF6KLavt4PO0gs2a6pQ00="),
        );
        verify_release_integrity(&r, b"hello").unwrap();
        assert!(verify_release_integrity(&r, b"other").is_err());
    }

    #[test]
    fn no_checksum_is_accepted() {
        verify_release_integrity(&release(None, None), b"anything").unwrap();
    }
}
