/// Persistence adapters for summary records.
///
/// This module contains:
/// - The `SummaryStore` interface the cache layer talks to
/// - A Redis-backed store for deployments
/// - An in-process store for tests and local runs
/// - The hash field mapping shared by both
pub mod memory_store;
pub mod redis_store;

use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::models::SummaryRecord;
use crate::errors::PageSumError;

pub use memory_store::MemorySummaryStore;
pub use redis_store::RedisSummaryStore;

pub const FIELD_SUMMARY: &str = "summary";
pub const FIELD_DATE_REFRESHED: &str = "dateRefreshed";
pub const FIELD_INTERNAL_URLS: &str = "internalUrls";
pub const FIELD_EXTERNAL_URLS: &str = "externalUrls";

/// Raw key-value store for summary records. Failures are reported, not hidden.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn get(&self, url: &str) -> Result<Option<SummaryRecord>, PageSumError>;

    /// Replace the record for `url`; the entry expires after `ttl_secs`.
    async fn put(
        &self,
        url: &str,
        record: &SummaryRecord,
        ttl_secs: u64,
    ) -> Result<(), PageSumError>;

    async fn delete(&self, url: &str) -> Result<(), PageSumError>;
}

/// Store key for a page. The URL is used verbatim.
#[must_use]
pub fn cache_key(url: &str) -> String {
    format!("summary:{url}")
}

/// Flatten a record into hash fields; URL lists become JSON arrays.
///
/// # Errors
///
/// Returns `CacheError` if a URL list cannot be serialized.
pub fn encode_record(record: &SummaryRecord) -> Result<Vec<(&'static str, String)>, PageSumError> {
    Ok(vec![
        (FIELD_SUMMARY, record.summary.clone()),
        (FIELD_DATE_REFRESHED, record.date_refreshed.clone()),
        (FIELD_INTERNAL_URLS, serde_json::to_string(&record.internal_urls)?),
        (FIELD_EXTERNAL_URLS, serde_json::to_string(&record.external_urls)?),
    ])
}

/// Rebuild a record from hash fields. An empty hash means no entry.
///
/// # Errors
///
/// Returns `CacheError` if a stored URL list is not a JSON array of strings.
pub fn decode_record(
    fields: &HashMap<String, String>,
) -> Result<Option<SummaryRecord>, PageSumError> {
    if fields.is_empty() {
        return Ok(None);
    }

    let text = |name: &str| fields.get(name).cloned().unwrap_or_default();
    let urls = |name: &str| -> Result<Vec<String>, PageSumError> {
        match fields.get(name) {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    };

    Ok(Some(SummaryRecord {
        summary: text(FIELD_SUMMARY),
        date_refreshed: text(FIELD_DATE_REFRESHED),
        internal_urls: urls(FIELD_INTERNAL_URLS)?,
        external_urls: urls(FIELD_EXTERNAL_URLS)?,
    }))
}
