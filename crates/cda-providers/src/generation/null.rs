//! Deterministic offline provider
//!
//! Produces canned, stage-labelled output without any network call. Used
//! for tests, demos, and running the service without an API key.

use async_trait::async_trait;

use cda_application::ports::providers::{GenerationProvider, GenerationRequest};
use cda_domain::error::Result;
use cda_domain::value_objects::StageKind;

/// Generation provider that fabricates plausible-shaped output locally
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerationProvider;

impl NullGenerationProvider {
    /// Create the provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenerationProvider for NullGenerationProvider {
    async fn generate(&self, stage: StageKind, request: &GenerationRequest) -> Result<String> {
        let output = match stage {
            StageKind::Parse => format!(
                "## Code Structure Overview\n\nOffline analysis placeholder.\n\n\
                 Prompt context: {} characters.",
                request.user.chars().count()
            ),
            StageKind::Docstring => {
                "// Documentation placeholder generated offline.".to_string()
            }
            StageKind::Markdown => {
                "# API Documentation\n\nGenerated offline; no model was consulted.".to_string()
            }
            StageKind::Diagram => "graph TD\n    A[Source] --> B[Documentation]".to_string(),
            StageKind::Validate => {
                "## Validation Report\n\nOffline mode: no quality checks performed.".to_string()
            }
        };
        Ok(output)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_provider_covers_every_stage() {
        let provider = NullGenerationProvider::new();
        let request = GenerationRequest::new("system", "user");
        for stage in StageKind::all() {
            let output = provider.generate(stage, &request).await.unwrap();
            assert!(!output.is_empty());
        }
    }
}
