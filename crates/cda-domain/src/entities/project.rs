//! Project entity
//!
//! A project is one documented source file. Its id is stable across
//! re-submissions of the same filename: a second upload of `sample.py`
//! updates the existing project instead of creating a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::DocumentationArtifactSet;
use crate::value_objects::{ChangeReport, Language, SubmissionStatus};

/// A documentation project tracking one logical source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Opaque unique identifier (UUID v4), stable across revisions
    pub id: String,
    /// Project name, derived from the filename stem
    pub name: String,
    /// Original filename of the upload
    pub file_name: String,
    /// Size of the current revision in bytes
    pub file_size: u64,
    /// Language detected from the file extension
    pub language: Language,
    /// Status of the most recent submission
    pub status: SubmissionStatus,
    /// Current snapshot revision counter
    pub revision: u64,
    /// When the project was first created
    pub created_at: DateTime<Utc>,
    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
    /// Current artifact set, absent until the first pipeline run persists
    pub artifacts: Option<DocumentationArtifactSet>,
    /// Change report from the most recent submission
    pub last_change: Option<ChangeReport>,
}

impl Project {
    /// Create a new project for a first-time upload
    pub fn new(file_name: impl Into<String>, language: Language, file_size: u64) -> Self {
        let file_name = file_name.into();
        let name = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem.to_string())
            .unwrap_or_else(|| file_name.clone());
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            file_name,
            file_size,
            language,
            status: SubmissionStatus::Pending,
            revision: 0,
            created_at: now,
            updated_at: now,
            artifacts: None,
            last_change: None,
        }
    }

    /// Record a new submission: bump the revision, mark the project as
    /// running, and touch the timestamp
    pub fn begin_revision(&mut self, file_size: u64) -> u64 {
        self.revision += 1;
        self.file_size = file_size;
        self.status = SubmissionStatus::Running;
        self.updated_at = Utc::now();
        self.revision
    }

    /// Commit the outcome of a pipeline run
    pub fn complete_revision(
        &mut self,
        status: SubmissionStatus,
        artifacts: DocumentationArtifactSet,
        change: ChangeReport,
    ) {
        self.status = status;
        self.artifacts = Some(artifacts);
        self.last_change = Some(change);
        self.updated_at = Utc::now();
    }

    /// Record a failed run without discarding artifacts from a prior run
    pub fn fail_revision(&mut self, change: ChangeReport) {
        self.status = SubmissionStatus::Failed;
        self.last_change = Some(change);
        self.updated_at = Utc::now();
    }

    /// Lightweight summary for listing endpoints
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            file_name: self.file_name.clone(),
            file_size: self.file_size,
            language: self.language,
            status: self.status,
            revision: self.revision,
            updated_at: self.updated_at,
        }
    }
}

/// Summary of a project, as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier
    pub id: String,
    /// Project name
    pub name: String,
    /// Original filename
    pub file_name: String,
    /// Size of the current revision in bytes
    pub file_size: u64,
    /// Detected language
    pub language: Language,
    /// Status of the most recent submission
    pub status: SubmissionStatus,
    /// Current revision counter
    pub revision: u64,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
