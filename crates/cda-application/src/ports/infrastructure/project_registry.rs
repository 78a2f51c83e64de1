//! Project metadata registry port
//!
//! Tracks project records across submissions. Identity is stable per
//! filename: `upsert` of a project whose filename already exists replaces
//! the prior record under the same id.

use async_trait::async_trait;
use cda_domain::entities::{Project, ProjectSummary};
use cda_domain::error::Result;

/// Registry of project metadata
#[async_trait]
pub trait ProjectRegistry: Send + Sync {
    /// Create or replace a project record
    async fn upsert(&self, project: &Project) -> Result<()>;

    /// Fetch a project by id; `Error::NotFound` when unknown
    async fn get(&self, project_id: &str) -> Result<Project>;

    /// Find the project tracking a given filename, if any
    async fn find_by_filename(&self, file_name: &str) -> Result<Option<Project>>;

    /// All project summaries, most recently updated first
    async fn list(&self) -> Result<Vec<ProjectSummary>>;

    /// Delete a project record; returns false when the id was unknown
    async fn delete(&self, project_id: &str) -> Result<bool>;
}
