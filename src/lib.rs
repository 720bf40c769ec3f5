/// pagesum - summarizes web pages with ChatGPT and caches the result per URL.
///
/// A single HTTP endpoint takes a URL, and the crate:
/// 1. Returns the cached record for that URL unless a refresh is forced
/// 2. Fetches the page, reduces it to readable text and asks the model for an HTML summary
/// 3. Collects every link on the page, split into same-host and other-host URLs
/// 4. Stores the combined record in Redis with a TTL and returns it
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface
/// - reqwest for page fetching and the `OpenAI` chat-completion call
/// - scraper for text and link extraction
/// - redis for the summary cache
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use pagesum::adapters::SummaryCache;
/// use pagesum::adapters::persistence::MemorySummaryStore;
/// use pagesum::clients::{HttpPageFetcher, LlmClient};
/// use pagesum::features::SummaryWorkflow;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     pagesum::setup_logging();
///
///     let summarizer = LlmClient::new(
///         "dummy_openai_key".to_string(),
///         "gpt-3.5-turbo-16k".to_string(),
///         "https://api.openai.com/v1".to_string(),
///         "Summarize this page as HTML.".to_string(),
///     )?;
///     let cache = SummaryCache::new(Arc::new(MemorySummaryStore::new()), 86_400);
///     let workflow = SummaryWorkflow::new(
///         Arc::new(HttpPageFetcher::new()),
///         Arc::new(summarizer),
///         cache,
///     );
///
///     let record = workflow.run("https://example.com", false).await?;
///     println!("Summary: {}", record.summary);
///     println!("Internal links: {:?}", record.internal_urls);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod adapters;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod utils;

pub use errors::PageSumError;

/// Configure structured logging with JSON format.
///
/// Installs a tracing-subscriber registry with a JSON formatter and an
/// `EnvFilter` read from `RUST_LOG` (default `info`). Call once at startup.
///
/// # Example
///
/// ```
/// pagesum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
