use std::sync::Arc;

use anyhow::Context;
use pagesum::adapters::SummaryCache;
use pagesum::adapters::persistence::{MemorySummaryStore, RedisSummaryStore, SummaryStore};
use pagesum::api::{AppState, create_router, serve};
use pagesum::clients::{HttpPageFetcher, LlmClient};
use pagesum::core::config::{AppConfig, CacheBackend};
use pagesum::features::SummaryWorkflow;
use pagesum::prompt::load_instructions;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pagesum::setup_logging();

    let config = AppConfig::from_env().inspect_err(|e| error!("Config error: {}", e))?;

    let instructions = load_instructions(&config.instructions_path)?;
    let summarizer = LlmClient::new(
        config.openai_api_key.clone(),
        config.model_name().to_string(),
        config.base_url().to_string(),
        instructions,
    )?;

    let store: Arc<dyn SummaryStore> = match config.cache_backend {
        CacheBackend::Redis => Arc::new(RedisSummaryStore::new(
            &config.redis_host,
            config.redis_port,
            config.redis_password.as_deref(),
        )?),
        CacheBackend::Memory => Arc::new(MemorySummaryStore::new()),
    };
    info!(
        backend = ?config.cache_backend,
        ttl_secs = config.cache_ttl_secs,
        model = %summarizer.model_name(),
        "Summary cache configured"
    );

    let workflow = SummaryWorkflow::new(
        Arc::new(HttpPageFetcher::new()),
        Arc::new(summarizer),
        SummaryCache::new(store, config.cache_ttl_secs),
    );

    let router = create_router(AppState::new(workflow), config.static_dir.as_deref());
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    serve(listener, router).await?;
    Ok(())
}
