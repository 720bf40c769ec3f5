//! Summary cache with the "never fail the request" policy.
//!
//! Store faults are logged here and turned into a miss (reads) or a no-op
//! (writes); callers never see a `CacheError`.

use std::sync::Arc;
use tracing::{error, info, warn};

use super::persistence::SummaryStore;
use crate::core::config::effective_ttl;
use crate::core::models::SummaryRecord;

#[derive(Clone)]
pub struct SummaryCache {
    store: Arc<dyn SummaryStore>,
    ttl_secs: u64,
}

impl SummaryCache {
    #[must_use]
    pub fn new(store: Arc<dyn SummaryStore>, ttl_secs: u64) -> Self {
        Self {
            store,
            ttl_secs: effective_ttl(ttl_secs),
        }
    }

    #[must_use]
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub async fn get(&self, url: &str) -> Option<SummaryRecord> {
        match self.store.get(url).await {
            Ok(Some(record)) => {
                info!("Cache hit for {}", url);
                Some(record)
            }
            Ok(None) => {
                info!("Cache miss for {}", url);
                None
            }
            Err(e) => {
                warn!("Cache read failed for url {}: {}", url, e);
                None
            }
        }
    }

    /// Returns whether the record was persisted.
    pub async fn put(&self, url: &str, record: &SummaryRecord) -> bool {
        match self.store.put(url, record, self.ttl_secs).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving summary to cache for url {}: {}", url, e);
                false
            }
        }
    }

    /// Returns whether the entry was removed.
    pub async fn delete(&self, url: &str) -> bool {
        match self.store.delete(url).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error deleting cached summary for url {}: {}", url, e);
                false
            }
        }
    }
}
