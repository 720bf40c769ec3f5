//! Client modules for external API interactions

pub mod llm_client;
pub mod page_fetcher;

pub use llm_client::{LlmClient, Summarizer};
pub use page_fetcher::{HttpPageFetcher, PageFetcher};
