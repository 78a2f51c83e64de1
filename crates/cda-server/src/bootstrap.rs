//! Service bootstrap
//!
//! Assembles the configured storage, provider, and pipeline components into
//! a running HTTP server. This is the only place concrete implementations
//! are chosen; everything below it works against the ports.

use std::sync::Arc;
use std::time::Duration;

use cda_application::pipeline::{StageExecutor, WorkflowOrchestrator};
use cda_application::ports::providers::GenerationProvider;
use cda_application::use_cases::{ProjectService, SubmissionService};
use cda_domain::error::{Error, Result};
use cda_infrastructure::config::AppConfig;
use cda_infrastructure::storage::{FilesystemArtifactStore, FilesystemProjectRegistry};
use cda_providers::generation::{NullGenerationProvider, OpenAiGenerationProvider};
use tracing::info;

use crate::routes::api_router;
use crate::state::AppState;

/// Build the generation provider named in the configuration
fn build_provider(config: &AppConfig) -> Result<Arc<dyn GenerationProvider>> {
    let generation = &config.generation;
    match generation.provider.as_str() {
        "openai" => {
            if generation.api_key.is_empty() {
                return Err(Error::config(
                    "OpenAI provider requires an API key; set generation.api_key or use the null provider",
                ));
            }
            let timeout = Duration::from_secs(generation.stage_timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| {
                    Error::config_with_source("Failed to create HTTP client", e)
                })?;
            Ok(Arc::new(OpenAiGenerationProvider::new(
                generation.api_key.clone(),
                Some(generation.base_url.clone()),
                generation.model.clone(),
                generation.temperature,
                timeout,
                http_client,
            )))
        }
        "null" => Ok(Arc::new(NullGenerationProvider::new())),
        other => Err(Error::config(format!(
            "Unknown generation provider: {other}"
        ))),
    }
}

/// Wire the application services from configuration
pub async fn build_state(config: &AppConfig) -> Result<AppState> {
    let registry = Arc::new(FilesystemProjectRegistry::open(&config.storage.data_dir).await?);
    let store = Arc::new(FilesystemArtifactStore::new(&config.storage.data_dir));

    let provider = build_provider(config)?;
    info!(provider = provider.provider_name(), model = %config.generation.model, "generation provider ready");

    let executor = StageExecutor::new(
        provider,
        Duration::from_secs(config.generation.stage_timeout_secs),
    );
    let orchestrator = WorkflowOrchestrator::new(executor);

    let submission = Arc::new(SubmissionService::new(
        registry.clone(),
        store.clone(),
        orchestrator,
    ));
    let projects = Arc::new(ProjectService::new(registry, store));

    Ok(AppState::new(submission, projects))
}

/// Run the HTTP server until shutdown
pub async fn run(config: AppConfig) -> Result<()> {
    let state = build_state(&config).await?;
    let router = api_router(state, config.server.max_upload_bytes);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::internal(format!("server error: {e}")))?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server simply runs until killed
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
