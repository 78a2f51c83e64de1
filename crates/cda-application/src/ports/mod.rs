//! Application Ports
//!
//! Interfaces the application layer requires from the outside world.
//! Providers implement the provider ports; infrastructure implements the
//! storage ports. The application never constructs a concrete adapter.

/// Infrastructure ports (artifact store, project registry)
pub mod infrastructure;
/// Provider ports (text generation)
pub mod providers;

pub use infrastructure::{ArtifactStore, ProjectRegistry};
pub use providers::{GenerationProvider, GenerationRequest};
