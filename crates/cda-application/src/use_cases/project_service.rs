//! Project queries, exports, and deletion

use std::sync::Arc;

use cda_domain::entities::{ArtifactKind, Project, ProjectSummary};
use cda_domain::error::{Error, Result};
use tracing::{info, instrument};

use crate::ports::infrastructure::{ArtifactStore, ProjectRegistry};

/// Read-side and lifecycle operations on persisted projects
pub struct ProjectService {
    registry: Arc<dyn ProjectRegistry>,
    store: Arc<dyn ArtifactStore>,
}

impl ProjectService {
    /// Wire the service to its ports
    pub fn new(registry: Arc<dyn ProjectRegistry>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { registry, store }
    }

    /// Fetch the full project record
    pub async fn get(&self, project_id: &str) -> Result<Project> {
        self.registry.get(project_id).await
    }

    /// List all projects, most recently updated first
    pub async fn list(&self) -> Result<Vec<ProjectSummary>> {
        self.registry.list().await
    }

    /// The assembled documentation document for a project
    pub async fn documentation(&self, project_id: &str) -> Result<String> {
        self.artifact(project_id, ArtifactKind::Assembled).await
    }

    /// The structural analysis artifact for a project
    pub async fn analysis(&self, project_id: &str) -> Result<String> {
        self.artifact(project_id, ArtifactKind::Analysis).await
    }

    /// All present artifacts as `(export filename, bytes)` pairs
    ///
    /// Used by the archive endpoint; order follows the canonical artifact
    /// kind order so archives are reproducible.
    pub async fn archive_entries(&self, project_id: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let project = self.registry.get(project_id).await?;
        let artifacts = project
            .artifacts
            .ok_or_else(|| Error::not_found(format!("documentation for project {project_id}")))?;

        let mut entries = Vec::new();
        for kind in artifacts.present_kinds() {
            if let Some(body) = artifacts.get(kind) {
                entries.push((kind.export_name().to_string(), body.as_bytes().to_vec()));
            }
        }
        Ok(entries)
    }

    /// Delete a project record and every blob belonging to it
    #[instrument(skip(self))]
    pub async fn delete(&self, project_id: &str) -> Result<()> {
        if !self.registry.delete(project_id).await? {
            return Err(Error::not_found(format!("project {project_id}")));
        }
        self.store.delete_project(project_id).await?;
        info!(project_id, "project deleted");
        Ok(())
    }

    async fn artifact(&self, project_id: &str, kind: ArtifactKind) -> Result<String> {
        // A project that exists but has no generated artifacts (e.g. its
        // only run failed at Parse) is still a 404 on the artifact itself
        let project = self.registry.get(project_id).await?;
        let has_artifact = project
            .artifacts
            .as_ref()
            .is_some_and(|set| set.get(kind).is_some());
        if !has_artifact {
            return Err(Error::not_found(format!(
                "documentation for project {project_id}"
            )));
        }
        self.store.get_artifact(project_id, kind).await
    }
}
