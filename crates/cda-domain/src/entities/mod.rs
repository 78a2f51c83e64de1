//! Domain Entities
//!
//! Entities carry identity across their lifetime. A [`Project`] keeps its id
//! across re-submissions of the same filename; its snapshots and artifact
//! set are replaced per revision.

/// Generated documentation artifact set
pub mod artifact;
/// Project entity and summaries
pub mod project;
/// Immutable source snapshots
pub mod snapshot;

pub use artifact::{ArtifactKind, DocumentationArtifactSet};
pub use project::{Project, ProjectSummary};
pub use snapshot::SourceSnapshot;
