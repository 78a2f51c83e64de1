//! Provider Implementations - Code Documentation Agent
//!
//! Concrete [`GenerationProvider`](cda_application::ports::providers::GenerationProvider)
//! backends:
//!
//! - `openai`: chat-completions API (OpenAI or any compatible endpoint)
//! - `null`: deterministic canned outputs for tests and offline runs

pub mod generation;

pub use generation::{NullGenerationProvider, OpenAiGenerationProvider};
