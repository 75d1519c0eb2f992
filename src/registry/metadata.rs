//! Registry metadata documents and release selection.

use crate::error::{BuildError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Packument subset returned by `GET <registry>/<name>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryMetadata {
    /// Tag name to version (`latest`, `next`, ...)
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,

    /// Version string to per-version manifest
    #[serde(default)]
    pub versions: HashMap<String, VersionManifest>,
}

/// Per-version entry of [`RegistryMetadata::versions`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionManifest {
    #[serde(default)]
    pub dist: Option<DistInfo>,
}

/// Distribution info of a single version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistInfo {
    #[serde(default)]
    pub tarball: Option<String>,

    /// Hex SHA-1 of the tarball
    #[serde(default)]
    pub shasum: Option<String>,

    /// Subresource-integrity string, e.g. `sha512-<base64>`
    #[serde(default)]
    pub integrity: Option<String>,
}

/// Version chosen for this run and where to download it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub version: String,
    pub tarball_url: String,
    pub shasum: Option<String>,
    pub integrity: Option<String>,
}

/// Dist-tag used when no version is requested.
pub const LATEST_TAG: &str = "latest";

/// Pick the release for `requested` out of `metadata`.
///
/// A non-blank request is looked up verbatim in `versions`; if no such
/// version exists but a dist-tag of that name does, the tag is followed.
/// Without a request the `latest` tag is used.
pub fn select_release(
    package: &str,
    metadata: &RegistryMetadata,
    requested: Option<&str>,
) -> Result<ResolvedRelease> {
    let requested = requested.map(str::trim).filter(|v| !v.is_empty());

    let version = match requested {
        Some(v) if metadata.versions.contains_key(v) => v.to_string(),
        Some(v) => match metadata.dist_tags.get(v) {
            Some(tagged) => {
                log::debug!("'{}' is a dist-tag for {}", v, tagged);
                tagged.clone()
            }
            None => v.to_string(),
        },
        None => metadata
            .dist_tags
            .get(LATEST_TAG)
            .cloned()
            .ok_or_else(|| BuildError::TarballNotFound {
                package: package.to_string(),
                version: LATEST_TAG.to_string(),
            })?,
    };

    let dist = metadata
        .versions
        .get(&version)
        .and_then(|manifest| manifest.dist.as_ref());

    let tarball_url = dist
        .and_then(|d| d.tarball.as_deref())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| BuildError::TarballNotFound {
            package: package.to_string(),
            version: version.clone(),
        })?;

    Ok(ResolvedRelease {
        version: version.clone(),
        tarball_url: tarball_url.to_string(),
        shasum: dist.and_then(|d| d.shasum.clone()),
        integrity: dist.and_then(|d| d.integrity.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> RegistryMetadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn latest_tag_is_default() {
        let meta = metadata(
            r#"{"dist-tags":{"latest":"2.0.0"},
                "versions":{"2.0.0":{"dist":{"tarball":"https://x/y.tgz"}}}}"#,
        );
        let release = select_release("pkg", &meta, None).unwrap();
        assert_eq!(release.version, "2.0.0");
        assert_eq!(release.tarball_url, "https://x/y.tgz");
        assert_eq!(release.shasum, None);
    }

    #[test]
    fn explicit_version_used_verbatim() {
        let meta = metadata(
            r#"{"dist-tags":{"latest":"2.0.0"},
                "versions":{
                  "1.0.0":{"dist":{"tarball":"https://x/1.tgz","shasum":"abc"}},
                  "2.0.0":{"dist":{"tarball":"https://x/2.tgz"}}}}"#,
        );
        let release = select_release("pkg", &meta, Some(" 1.0.0 ")).unwrap();
        assert_eq!(release.version, "1.0.0");
        assert_eq!(release.tarball_url, "https://x/1.tgz");
        assert_eq!(release.shasum.as_deref(), Some("abc"));
    }

    #[test]
    fn requested_tag_is_followed() {
        let meta = metadata(
            r#"{"dist-tags":{"latest":"2.0.0","next":"3.0.0-rc.1"},
                "versions":{"3.0.0-rc.1":{"dist":{"tarball":"https://x/3.tgz"}}}}"#,
        );
        let release = select_release("pkg", &meta, Some("next")).unwrap();
        assert_eq!(release.version, "3.0.0-rc.1");
    }

    #[test]
    fn version_without_tarball_is_not_found() {
        let meta = metadata(r#"{"versions":{"1.0.0":{"dist":{}}}}"#);
        let err = select_release("pkg", &meta, Some("1.0.0")).unwrap_err();
        assert!(matches!(
            err,
            BuildError::TarballNotFound { ref version, .. } if version == "1.0.0"
        ));
    }

    #[test]
    fn unknown_version_is_not_found() {
        let meta = metadata(r#"{"dist-tags":{"latest":"1.0.0"},"versions":{}}"#);
        assert!(matches!(
            select_release("pkg", &meta, Some("9.9.9")),
            Err(BuildError::TarballNotFound { .. })
        ));
        assert!(matches!(
            select_release("pkg", &meta, None),
            Err(BuildError::TarballNotFound { .. })
        ));
    }

    #[test]
    fn missing_latest_tag_is_not_found() {
        let meta = metadata(r#"{"versions":{"1.0.0":{"dist":{"tarball":"u"}}}}"#);
        assert!(matches!(
            select_release("pkg", &meta, None),
            Err(BuildError::TarballNotFound { ref version, .. }) if version == "latest"
        ));
    }
}
