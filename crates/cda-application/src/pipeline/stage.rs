//! Single stage execution with timing and timeout
//!
//! The executor is the only place a provider call happens. It never returns
//! an error: provider failures and timeouts are folded into a failed
//! [`StageResult`] so the orchestrator can keep the run going and classify
//! the submission afterwards.

use std::sync::Arc;
use std::time::{Duration, Instant};

use cda_domain::value_objects::{StageKind, StageResult};
use tracing::{info, warn};

use crate::domain_services::{prompts, StageContext};
use crate::ports::providers::GenerationProvider;

/// Executes one pipeline stage against the generation provider
#[derive(Clone)]
pub struct StageExecutor {
    provider: Arc<dyn GenerationProvider>,
    stage_timeout: Duration,
}

impl StageExecutor {
    /// Create an executor with the per-stage timeout
    pub fn new(provider: Arc<dyn GenerationProvider>, stage_timeout: Duration) -> Self {
        Self {
            provider,
            stage_timeout,
        }
    }

    /// Render the stage prompt and run the provider call
    ///
    /// Timeouts count as stage failures with the elapsed time recorded.
    pub async fn execute(&self, stage: StageKind, ctx: &StageContext) -> StageResult {
        let request = prompts::render(stage, ctx);
        let started = Instant::now();

        let outcome = tokio::time::timeout(
            self.stage_timeout,
            self.provider.generate(stage, &request),
        )
        .await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(Ok(output)) => {
                info!(
                    stage = %stage,
                    provider = self.provider.provider_name(),
                    elapsed_ms,
                    output_chars = output.chars().count(),
                    "stage completed"
                );
                StageResult::success(stage, output, elapsed_ms)
            }
            Ok(Err(err)) => {
                warn!(stage = %stage, elapsed_ms, error = %err, "stage failed");
                StageResult::failed(stage, err.to_string(), elapsed_ms)
            }
            Err(_) => {
                warn!(
                    stage = %stage,
                    timeout_secs = self.stage_timeout.as_secs(),
                    "stage timed out"
                );
                StageResult::failed(
                    stage,
                    format!(
                        "stage timed out after {}s",
                        self.stage_timeout.as_secs()
                    ),
                    elapsed_ms,
                )
            }
        }
    }
}
