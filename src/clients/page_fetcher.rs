//! HTTP page fetching

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::PageSumError;

/// Retrieves the raw markup of a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure or a non-success status.
    async fn fetch(&self, url: &str) -> Result<String, PageSumError>;
}

/// Plain `reqwest` fetcher: one GET, client defaults for redirects and timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PageSumError> {
        debug!("Fetching page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PageSumError::FetchError(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageSumError::FetchError(format!(
                "HTTP {} for: {}",
                status.as_u16(),
                url
            )));
        }

        let markup = response
            .text()
            .await
            .map_err(|e| PageSumError::FetchError(format!("reading body of {url}: {e}")))?;

        info!("Fetched {} bytes from: {}", markup.len(), url);
        Ok(markup)
    }
}
