//! Provider ports

/// Text generation provider port
pub mod generation;

pub use generation::{GenerationProvider, GenerationRequest};
