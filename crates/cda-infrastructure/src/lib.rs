//! Infrastructure Layer - Code Documentation Agent
//!
//! Concrete implementations of the application's infrastructure ports plus
//! the cross-cutting concerns every deployment needs:
//!
//! - **Configuration**: layered loading (defaults, TOML file, environment)
//!   backed by Figment
//! - **Logging**: structured tracing initialization with optional JSON
//!   output
//! - **Storage**: filesystem-backed artifact store and project registry

pub mod config;
pub mod constants;
pub mod logging;
pub mod storage;

pub use config::{AppConfig, ConfigLoader, GenerationConfig, LoggingConfig, ServerConfig, StorageConfig};
pub use logging::init_logging;
pub use storage::{FilesystemArtifactStore, FilesystemProjectRegistry};
