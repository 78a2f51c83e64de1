//! Domain Layer - Code Documentation Agent
//!
//! Core business types for the documentation pipeline: projects, source
//! snapshots, generated artifact sets, change reports, and stage results.
//! This crate has no knowledge of HTTP, storage backends, or the LLM
//! provider - those live behind ports in the application layer.
//!
//! ## Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`entities::Project`] | A documented source file with a stable identity |
//! | [`entities::SourceSnapshot`] | Immutable revision of uploaded content |
//! | [`entities::DocumentationArtifactSet`] | Outputs of one pipeline run |
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`value_objects::ChangeReport`] | Structural diff between two snapshots |
//! | [`value_objects::StageResult`] | Outcome of a single pipeline stage |
//! | [`value_objects::Language`] | Programming language detected from extension |

pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{ArtifactKind, DocumentationArtifactSet, Project, ProjectSummary, SourceSnapshot};
pub use error::{Error, Result};
pub use value_objects::{
    ChangeReport, CodeUnit, Language, StageKind, StageResult, StageStatus, SubmissionStatus,
    UnitChange, UnitKind,
};
