//! Configuration management
//!
//! Layered configuration: compiled-in defaults, an optional TOML file, and
//! `CDA_`-prefixed environment variables, merged in that order.

/// Configuration data structures
pub mod data;
/// Configuration loading and validation
pub mod loader;

pub use data::{AppConfig, GenerationConfig, LoggingConfig, ServerConfig, StorageConfig};
pub use loader::ConfigLoader;
