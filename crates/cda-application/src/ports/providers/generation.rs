//! Text generation provider port

use async_trait::async_trait;
use cda_domain::error::Result;
use cda_domain::value_objects::StageKind;

/// A rendered prompt pair ready to be sent to a generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// System instructions describing the stage's task
    pub system: String,
    /// User message carrying the source code and upstream context
    pub user: String,
}

impl GenerationRequest {
    /// Create a new request from rendered prompt parts
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Documentation Generation Interface
///
/// Defines the contract for services that turn a rendered prompt into
/// generated documentation text. Each pipeline stage performs exactly one
/// call through this port; the stage kind is passed so implementations can
/// log or route per stage, but the prompt is already fully rendered.
///
/// Failures (timeout, quota, malformed response) surface as
/// [`cda_domain::error::Error::Generation`]; the caller decides whether that
/// fails the whole submission (Parse stage) or only the stage's slot.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate text for one pipeline stage
    async fn generate(&self, stage: StageKind, request: &GenerationRequest) -> Result<String>;

    /// Name/identifier of this provider implementation (e.g. "openai", "null")
    fn provider_name(&self) -> &str;
}
