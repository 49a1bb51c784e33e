//! HTTP client for fetching course catalog pages.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use wreq::Client;

/// Why a single page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status.
    #[error("status code {0}")]
    Status(u16),

    /// Connection, timeout or other transport failure.
    #[error("request failed: {0}")]
    Request(#[source] wreq::Error),

    /// Response body could not be read or decoded.
    #[error("failed to read response body: {0}")]
    Body(#[source] wreq::Error),
}

/// Trait for page fetching - enables mocking for tests.
#[async_trait]
pub trait CatalogFetch: Send + Sync {
    /// Fetches a page and returns its body on a success status.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Plain HTTP client for catalog pages.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogFetch for CatalogClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(FetchError::Request)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Body)
    }
}
