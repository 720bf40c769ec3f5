use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::{SummaryStore, cache_key, decode_record, encode_record};
use crate::core::models::SummaryRecord;
use crate::errors::PageSumError;

struct StoredHash {
    fields: HashMap<String, String>,
    expires_at: Instant,
}

/// In-process store using the same hash encoding as Redis.
///
/// Entries past their TTL read as absent and are dropped on the next write.
#[derive(Default)]
pub struct MemorySummaryStore {
    entries: RwLock<HashMap<String, StoredHash>>,
}

impl MemorySummaryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| {
            let now = Instant::now();
            entries.values().filter(|e| e.expires_at > now).count()
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> PageSumError {
    PageSumError::CacheError("memory store lock poisoned".to_string())
}

#[async_trait]
impl SummaryStore for MemorySummaryStore {
    async fn get(&self, url: &str) -> Result<Option<SummaryRecord>, PageSumError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        match entries.get(&cache_key(url)) {
            Some(entry) if entry.expires_at > Instant::now() => decode_record(&entry.fields),
            _ => Ok(None),
        }
    }

    async fn put(
        &self,
        url: &str,
        record: &SummaryRecord,
        ttl_secs: u64,
    ) -> Result<(), PageSumError> {
        let fields = encode_record(record)?
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(ttl_secs))
            .unwrap_or_else(|| now + Duration::from_secs(u64::from(u32::MAX)));

        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(cache_key(url), StoredHash { fields, expires_at });
        Ok(())
    }

    async fn delete(&self, url: &str) -> Result<(), PageSumError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(&cache_key(url));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(urls: &[&str]) -> SummaryRecord {
        SummaryRecord {
            summary: "<p>summary</p>".to_string(),
            date_refreshed: "2024-05-01T12:00:00.000Z".to_string(),
            internal_urls: urls.iter().map(ToString::to_string).collect(),
            external_urls: vec!["https://b.com/w".to_string()],
        }
    }

    #[tokio::test]
    async fn round_trip_keeps_url_order() {
        let store = MemorySummaryStore::new();
        let stored = record(&["u1", "u2"]);
        store.put("https://a.com", &stored, 60).await.unwrap();

        let read = store.get("https://a.com").await.unwrap().unwrap();
        assert_eq!(read.internal_urls, vec!["u1".to_string(), "u2".to_string()]);
        assert_eq!(read, stored);
    }

    #[tokio::test]
    async fn zero_ttl_entry_is_expired() {
        let store = MemorySummaryStore::new();
        store.put("https://a.com", &record(&[]), 0).await.unwrap();
        assert!(store.get("https://a.com").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let store = MemorySummaryStore::new();
        store.put("https://a.com", &record(&[]), 60).await.unwrap();
        assert_eq!(store.len(), 1);

        store.delete("https://a.com").await.unwrap();
        assert!(store.get("https://a.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn keys_are_exact_urls() {
        let store = MemorySummaryStore::new();
        store.put("https://a.com/", &record(&[]), 60).await.unwrap();
        assert!(store.get("https://a.com").await.unwrap().is_none());
        assert!(store.get("http://a.com/").await.unwrap().is_none());
        assert!(store.get("https://a.com/").await.unwrap().is_some());
    }
}
