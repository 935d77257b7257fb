//! Wiring of config into a store and resolver.

use anyhow::Context;
use continuity_config::ContinuityConfig;
use continuity_core::{GeminiClient, QueryResolver};
use continuity_memory::FileKnowledgeStore;
use log::info;
use std::sync::Arc;

/// Open the file-backed knowledge store named by `memory.path`.
pub fn open_store(config: &ContinuityConfig) -> anyhow::Result<Arc<FileKnowledgeStore>> {
    let store = FileKnowledgeStore::new(&config.memory.path)
        .with_context(|| format!("failed to open knowledge store {}", config.memory.path))?;
    Ok(Arc::new(store))
}

/// Build a resolver over `store` backed by Gemini, reading the API key
/// through `lookup`.
pub fn build_resolver<F>(
    config: &ContinuityConfig,
    store: Arc<FileKnowledgeStore>,
    lookup: F,
) -> anyhow::Result<QueryResolver>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = config.api_key(lookup)?;
    let client = GeminiClient::new(api_key)?
        .with_model(&config.provider.model)
        .with_endpoint(&config.provider.endpoint);
    info!(
        "using gemini provider (model={}, timeout={:?})",
        client.model(),
        config.provider.timeout()
    );
    Ok(QueryResolver::new(store, Arc::new(client)).with_timeout(config.provider.timeout()))
}
