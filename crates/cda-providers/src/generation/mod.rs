//! Text generation providers

/// Deterministic offline provider
pub mod null;
/// OpenAI chat-completions provider
pub mod openai;

pub use null::NullGenerationProvider;
pub use openai::OpenAiGenerationProvider;
