//! HTTP content source for the `github/gitignore` repository layout.
//!
//! Directory listings come from the contents API and raw files from the raw
//! content host. Both base URLs are configurable so the source can point at
//! a mirror or a test server.

use anyhow::Context;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

use super::source::{ContentSource, RemoteEntry};
use crate::error::{GitignoreError, Result};

/// Default contents API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/repos/github/gitignore/contents";

/// Default raw content endpoint.
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main";

/// Fetches listings and templates over HTTP/HTTPS.
pub struct GitHubSource {
    client: Client,
    api_url: String,
    raw_url: String,
    timeout: Duration,
}

impl GitHubSource {
    /// Create a source with the default 30-second timeout.
    pub fn new(api_url: impl Into<String>, raw_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_url, raw_url, Duration::from_secs(30))
    }

    /// Create a source with a custom timeout.
    pub fn with_timeout(
        api_url: impl Into<String>,
        raw_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gitignore-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: trim_base(api_url.into()),
            raw_url: trim_base(raw_url.into()),
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Contents API URL of a category.
    pub fn listing_url(&self, category: &str) -> String {
        if category.is_empty() {
            self.api_url.clone()
        } else {
            format!("{}/{}", self.api_url, category)
        }
    }

    fn get(&self, url: &str) -> std::result::Result<Response, String> {
        let response = self.client.get(url).send().map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }

        Ok(response)
    }
}

impl ContentSource for GitHubSource {
    fn list_category(&self, category: &str) -> Result<Vec<RemoteEntry>> {
        let url = self.listing_url(category);
        tracing::debug!("Listing {}", url);

        let listing_error = |message: String| GitignoreError::Listing {
            category: category.to_string(),
            message,
        };

        let response = self.get(&url).map_err(listing_error)?;
        response
            .json::<Vec<RemoteEntry>>()
            .map_err(|e| listing_error(format!("invalid listing: {}", e)))
    }

    fn fetch_content(&self, location: &str) -> Result<String> {
        tracing::debug!("Fetching {}", location);

        let fetch_error = |message: String| GitignoreError::Fetch {
            location: location.to_string(),
            message,
        };

        let response = self.get(location).map_err(fetch_error)?;
        response.text().map_err(|e| fetch_error(e.to_string()))
    }

    fn content_location(&self, path: &str) -> String {
        format!("{}/{}", self.raw_url, path)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
