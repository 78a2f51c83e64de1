//! Filesystem-backed storage
//!
//! All project data lives under one root directory:
//!
//! ```text
//! data/
//!   <project-id>/
//!     project.json            project metadata record
//!     artifacts/<kind>.md     generated artifacts
//!     snapshots/<rev>.json    source snapshots
//! ```

/// Artifact and snapshot blob store
pub mod filesystem;
/// Project metadata registry
pub mod registry;

pub use filesystem::FilesystemArtifactStore;
pub use registry::FilesystemProjectRegistry;
