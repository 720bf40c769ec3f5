use std::sync::Arc;
use tracing::{Instrument, info, info_span};

use crate::adapters::SummaryCache;
use crate::clients::{PageFetcher, Summarizer};
use crate::core::models::SummaryRecord;
use crate::errors::PageSumError;
use crate::utils::{extract_links, extract_text};

/// Cache lookup → fetch → clean → summarize → extract links → store.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Clone)]
pub struct SummaryWorkflow {
    fetcher: Arc<dyn PageFetcher>,
    summarizer: Arc<dyn Summarizer>,
    cache: SummaryCache,
}

impl SummaryWorkflow {
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        summarizer: Arc<dyn Summarizer>,
        cache: SummaryCache,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
            cache,
        }
    }

    /// Return the cached record for `url`, or compute and cache a new one.
    ///
    /// With `force_refresh` the cache is not consulted. Cache faults never
    /// fail the run; fetch, extraction and summarization faults do, and in
    /// that case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` or `SummarizationError` from the failing step.
    pub async fn run(&self, url: &str, force_refresh: bool) -> Result<SummaryRecord, PageSumError> {
        let span = info_span!("summarize_workflow", url = %url, force_refresh);
        self.run_inner(url, force_refresh).instrument(span).await
    }

    async fn run_inner(&self, url: &str, force_refresh: bool) -> Result<SummaryRecord, PageSumError> {
        if !force_refresh && let Some(cached) = self.cache.get(url).await {
            return Ok(cached);
        }

        let summary = self.summarize_page(url).await?;

        // The page is fetched a second time for links, one request per step.
        let markup = self.fetcher.fetch(url).await?;
        let links = extract_links(url, &markup)?;

        let record = SummaryRecord::new(summary, links.internal, links.external);
        info!(
            internal = record.internal_urls.len(),
            external = record.external_urls.len(),
            "Computed summary record"
        );

        self.cache.put(url, &record).await;

        Ok(record)
    }

    async fn summarize_page(&self, url: &str) -> Result<String, PageSumError> {
        let markup = self.fetcher.fetch(url).await?;
        let text = extract_text(&markup);
        self.summarizer.summarize(&text, url).await
    }
}
