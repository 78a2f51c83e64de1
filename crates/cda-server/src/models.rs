//! Request and response models

use cda_domain::entities::{Project, ProjectSummary};
use cda_domain::value_objects::{ChangeReport, Language, StageResult};
use serde::{Deserialize, Serialize};

/// Upload request body
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    /// Original filename including its extension
    pub file_name: String,
    /// Full text content of the file
    pub content: String,
}

/// Response to a completed submission
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// The persisted project record
    pub project: Project,
    /// Per-stage pipeline results
    pub stages: Vec<StageResult>,
    /// Change report for this revision
    pub change: ChangeReport,
}

/// Response for the project listing endpoint
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    /// Project summaries, most recently updated first
    pub projects: Vec<ProjectSummary>,
    /// Total number of projects
    pub total: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Languages accepted by the upload endpoint
    pub supported_languages: Vec<String>,
}

impl HealthResponse {
    /// Healthy response with the supported language list
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            supported_languages: Language::supported_languages()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
