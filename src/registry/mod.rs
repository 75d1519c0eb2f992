//! npm registry client: metadata lookup and version resolution.

mod metadata;

pub use metadata::{
    DistInfo, LATEST_TAG, RegistryMetadata, ResolvedRelease, VersionManifest, select_release,
};

use crate::error::{BuildError, Result};
use url::Url;

/// Public npm registry.
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org";

/// Thin client over a registry's metadata endpoint.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RegistryClient {
    /// Creates a client for the registry at `base_url`.
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Underlying HTTP client, shared with the archive fetcher.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Metadata URL for `package`, with the name as one encoded path segment.
    pub fn metadata_url(&self, package: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BuildError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .push(package);
        Ok(url)
    }

    /// Fetch the packument for `package`.
    pub async fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata> {
        let url = self.metadata_url(package)?;
        log::info!("Querying registry: {}", url);

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BuildError::RegistryUnreachable {
                package: package.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Resolve `requested` (or `latest`) to a downloadable release.
    pub async fn resolve(&self, package: &str, requested: Option<&str>) -> Result<ResolvedRelease> {
        let metadata = self.fetch_metadata(package).await?;
        let release = select_release(package, &metadata, requested)?;
        log::debug!(
            "Resolved {}@{} -> {}",
            package,
            release.version,
            release.tarball_url
        );
        Ok(release)
    }
}
