use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::collections::HashMap;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::{SummaryStore, cache_key, decode_record, encode_record};
use crate::core::models::SummaryRecord;
use crate::errors::PageSumError;

/// Redis hash per page, shared connection opened on first use.
///
/// The `ConnectionManager` reconnects by itself after a dropped connection;
/// until it does, calls fail with `CacheError`.
pub struct RedisSummaryStore {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisSummaryStore {
    /// No network traffic happens here; the connection is made lazily.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the connection URL is invalid.
    pub fn new(host: &str, port: u16, password: Option<&str>) -> Result<Self, PageSumError> {
        Self::from_url(&redis_url(host, port, password))
    }

    /// # Errors
    ///
    /// Returns `CacheError` if `url` is not a valid Redis URL.
    pub fn from_url(url: &str) -> Result<Self, PageSumError> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, PageSumError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                info!("Connecting to Redis");
                self.client.get_connection_manager().await
            })
            .await?;
        Ok(manager.clone())
    }
}

/// `redis://[:password@]host:port/`, with the password percent-encoded.
#[must_use]
pub fn redis_url(host: &str, port: u16, password: Option<&str>) -> String {
    match password {
        Some(pw) if !pw.is_empty() => format!(
            "redis://:{}@{}:{}/",
            utf8_percent_encode(pw, NON_ALPHANUMERIC),
            host,
            port
        ),
        _ => format!("redis://{host}:{port}/"),
    }
}

#[async_trait]
impl SummaryStore for RedisSummaryStore {
    async fn get(&self, url: &str) -> Result<Option<SummaryRecord>, PageSumError> {
        let mut con = self.connection().await?;
        let fields: HashMap<String, String> = con.hgetall(cache_key(url)).await?;
        decode_record(&fields)
    }

    async fn put(
        &self,
        url: &str,
        record: &SummaryRecord,
        ttl_secs: u64,
    ) -> Result<(), PageSumError> {
        let key = cache_key(url);
        let fields = encode_record(record)?;
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);

        let mut con = self.connection().await?;
        let _: () = redis::pipe()
            .atomic()
            .hset_multiple(&key, fields.as_slice())
            .ignore()
            .expire(&key, ttl)
            .ignore()
            .query_async(&mut con)
            .await?;

        debug!("Stored {} with ttl {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, url: &str) -> Result<(), PageSumError> {
        let key = cache_key(url);
        let mut con = self.connection().await?;
        let _: () = con.del(&key).await?;
        info!("Deleted key {} from Redis", key);
        Ok(())
    }
}
