//! Use Cases
//!
//! Application services orchestrating the ports: submission handling (the
//! full upload-to-persisted-project flow) and project queries.

/// Project queries, exports, and deletion
pub mod project_service;
/// Source submission and pipeline execution
pub mod submission;

pub use project_service::ProjectService;
pub use submission::{SubmissionOutcome, SubmissionService};
