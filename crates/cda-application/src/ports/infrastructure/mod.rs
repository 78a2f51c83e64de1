//! Infrastructure ports

/// Durable artifact and snapshot storage port
pub mod artifact_store;
/// Project metadata registry port
pub mod project_registry;

pub use artifact_store::ArtifactStore;
pub use project_registry::ProjectRegistry;
