//! Page fetching backends.
//!
//! The indexer fetches pages through [`PageFetcher`], which resolves a page
//! identifier to its raw markup. [`HttpFetcher`] serves a deployed site,
//! [`DirectoryFetcher`] a checkout on disk, and [`SiteFetcher`] picks one
//! from [`SiteSource`] configuration.

use std::future::Future;
use std::path::PathBuf;

use url::Url;

use crate::config::{AssistantConfig, SiteSource};
use crate::error::{AssistantError, Result};
use crate::http::build_client;

/// Resolves page identifiers to raw page bodies.
///
/// All implementations must be `Send + Sync`; the indexer issues one fetch
/// per page concurrently.
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of page `id`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches pages over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher joining identifiers onto `base_url`.
    ///
    /// A base URL without a trailing slash is treated as a directory, so
    /// `https://hotel.example/site` serves `https://hotel.example/site/index.html`.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Config`] if `base_url` does not parse.
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| AssistantError::Config(format!("invalid base_url {base_url}: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    /// The URL a page identifier resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Http`] if the identifier cannot be joined.
    pub fn page_url(&self, id: &str) -> Result<Url> {
        self.base_url
            .join(id)
            .map_err(|e| AssistantError::Http(format!("invalid page url for {id}: {e}")))
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, id: &str) -> Result<String> {
        let url = self.page_url(id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AssistantError::Http(format!("request for {id} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Http(format!("{id}: status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| AssistantError::Http(format!("reading body of {id} failed: {e}")))
    }
}

/// Reads pages from a site root directory.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, as an HTTP
/// body decode would, rather than failing the page.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    /// Create a fetcher reading `<root>/<id>`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PageFetcher for DirectoryFetcher {
    async fn fetch(&self, id: &str) -> Result<String> {
        let path = self.root.join(id);
        let bytes = tokio::fs::read(&path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Fetcher selected from configuration.
#[derive(Debug, Clone)]
pub enum SiteFetcher {
    /// Deployed site over HTTP.
    Http(HttpFetcher),
    /// Site checkout on disk.
    Directory(DirectoryFetcher),
}

impl SiteFetcher {
    /// Build the fetcher described by `config.source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// is invalid.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        match config.source {
            SiteSource::Http { ref base_url } => {
                let client = build_client(config)?;
                Ok(Self::Http(HttpFetcher::new(client, base_url)?))
            }
            SiteSource::Directory { ref root } => {
                Ok(Self::Directory(DirectoryFetcher::new(root.clone())))
            }
        }
    }
}

impl PageFetcher for SiteFetcher {
    async fn fetch(&self, id: &str) -> Result<String> {
        match self {
            Self::Http(fetcher) => fetcher.fetch(id).await,
            Self::Directory(fetcher) => fetcher.fetch(id).await,
        }
    }
}
