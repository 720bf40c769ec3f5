use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageSumError {
    #[error("Failed to fetch page: {0}")]
    FetchError(String),

    #[error("Failed to summarize page: {0}")]
    SummarizationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Failed to access summary cache: {0}")]
    CacheError(String),
}

impl From<reqwest::Error> for PageSumError {
    fn from(error: reqwest::Error) -> Self {
        PageSumError::FetchError(error.to_string())
    }
}

impl From<redis::RedisError> for PageSumError {
    fn from(error: redis::RedisError) -> Self {
        PageSumError::CacheError(error.to_string())
    }
}

// Record encoding only happens on the cache path
impl From<serde_json::Error> for PageSumError {
    fn from(error: serde_json::Error) -> Self {
        PageSumError::CacheError(format!("record encoding: {error}"))
    }
}
