#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pagesum::PageSumError;
use pagesum::adapters::SummaryCache;
use pagesum::adapters::persistence::{MemorySummaryStore, SummaryStore};
use pagesum::clients::{PageFetcher, Summarizer};
use pagesum::core::models::SummaryRecord;
use pagesum::features::SummaryWorkflow;

pub const EXAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Example Domain</title></head>
<body>
  <h1>Example Domain</h1>
  <p>This domain is for use in illustrative examples.</p>
  <p><a href="/about">About</a> <a href="https://www.iana.org/domains/example">More information</a></p>
  <p>This domain is for use in illustrative examples.</p>
  <a href="http://[">broken</a>
</body>
</html>"#;

/// Serves canned markup per URL and counts calls.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    /// Calls beyond this many fail, when set.
    max_successes: Option<usize>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn with_page(url: &str, markup: &str) -> Self {
        let mut pages = HashMap::new();
        pages.insert(url.to_string(), markup.to_string());
        Self {
            pages,
            max_successes: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Serves `markup` for the first `successes` calls, then fails.
    pub fn failing_after(url: &str, markup: &str, successes: usize) -> Self {
        Self {
            max_successes: Some(successes),
            ..Self::with_page(url, markup)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PageSumError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.max_successes.is_some_and(|max| call >= max) {
            return Err(PageSumError::FetchError(format!(
                "connection reset while fetching {url}"
            )));
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| PageSumError::FetchError(format!("HTTP 404 for: {url}")))
    }
}

/// Echoes a fixed summary, or fails when told to.
pub struct FakeSummarizer {
    fail: bool,
    pub calls: AtomicUsize,
    pub last_text: std::sync::Mutex<Option<String>>,
}

impl FakeSummarizer {
    pub fn ok() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
            last_text: std::sync::Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(
        &self,
        extracted_text: &str,
        source_url: &str,
    ) -> Result<String, PageSumError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(extracted_text.to_string());
        if self.fail {
            return Err(PageSumError::SummarizationError(
                "OpenAI API error (500): boom".to_string(),
            ));
        }
        Ok(format!("<p>Summary of {source_url}</p>"))
    }
}

/// Store whose every call fails, like an unreachable Redis.
#[derive(Default)]
pub struct BrokenStore {
    pub puts: AtomicUsize,
}

#[async_trait]
impl SummaryStore for BrokenStore {
    async fn get(&self, _url: &str) -> Result<Option<SummaryRecord>, PageSumError> {
        Err(PageSumError::CacheError("connection refused".to_string()))
    }

    async fn put(
        &self,
        _url: &str,
        _record: &SummaryRecord,
        _ttl_secs: u64,
    ) -> Result<(), PageSumError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(PageSumError::CacheError("connection refused".to_string()))
    }

    async fn delete(&self, _url: &str) -> Result<(), PageSumError> {
        Err(PageSumError::CacheError("connection refused".to_string()))
    }
}

pub fn cached_record(summary: &str) -> SummaryRecord {
    SummaryRecord {
        summary: summary.to_string(),
        date_refreshed: "2024-05-01T12:00:00.000Z".to_string(),
        internal_urls: vec!["u1".to_string(), "u2".to_string()],
        external_urls: vec!["https://b.com/w".to_string()],
    }
}

pub fn workflow(
    fetcher: &Arc<FakeFetcher>,
    summarizer: &Arc<FakeSummarizer>,
    store: Arc<dyn SummaryStore>,
) -> SummaryWorkflow {
    SummaryWorkflow::new(
        fetcher.clone(),
        summarizer.clone(),
        SummaryCache::new(store, 3600),
    )
}

pub fn memory_store() -> Arc<MemorySummaryStore> {
    Arc::new(MemorySummaryStore::new())
}
