use std::env;

use crate::errors::PageSumError;
use crate::prompt::DEFAULT_INSTRUCTIONS_PATH;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;
/// One year. Larger values are treated like garbage input.
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 86_400;
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-16k";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub instructions_path: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
    pub cache_ttl_secs: u64,
    pub cache_backend: CacheBackend,
    pub bind_addr: String,
    pub static_dir: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigurationError` when `OPENAI_API_KEY` is missing or a
    /// variable holds a value that cannot be used.
    pub fn from_env() -> Result<Self, PageSumError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PageSumError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::read(&lookup).map_err(PageSumError::ConfigurationError)
    }

    fn read<F>(lookup: &F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY")
                .ok_or_else(|| "OPENAI_API_KEY is not set".to_string())?,
            openai_model: lookup("OPENAI_MODEL"),
            openai_base_url: lookup("OPENAI_BASE_URL"),
            instructions_path: lookup("INSTRUCTIONS_PATH")
                .unwrap_or_else(|| DEFAULT_INSTRUCTIONS_PATH.to_string()),
            redis_host: lookup("REDIS_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            redis_port: match lookup("REDIS_PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|e| format!("REDIS_PORT: {}", e))?,
                None => 6379,
            },
            redis_password: lookup("REDIS_PASSWORD").filter(|p| !p.is_empty()),
            cache_ttl_secs: parse_ttl(lookup("CACHE_TTL_SECS").as_deref()),
            cache_backend: parse_backend(lookup("CACHE_BACKEND").as_deref())?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: lookup("STATIC_DIR").filter(|d| !d.is_empty()),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }
}

/// Falls back to one day when the TTL is absent, unparsable, zero or above
/// [`MAX_CACHE_TTL_SECS`].
#[must_use]
pub fn parse_ttl(raw: Option<&str>) -> u64 {
    effective_ttl(
        raw.and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS),
    )
}

/// Clamps a TTL into the range every store accepts.
#[must_use]
pub fn effective_ttl(ttl_secs: u64) -> u64 {
    if ttl_secs == 0 || ttl_secs > MAX_CACHE_TTL_SECS {
        DEFAULT_CACHE_TTL_SECS
    } else {
        ttl_secs
    }
}

fn parse_backend(raw: Option<&str>) -> Result<CacheBackend, String> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("redis") => Ok(CacheBackend::Redis),
        Some("memory") => Ok(CacheBackend::Memory),
        Some(other) => Err(format!("CACHE_BACKEND: unknown backend '{}'", other)),
    }
}
