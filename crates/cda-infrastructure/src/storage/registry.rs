//! Project metadata registry
//!
//! Records live as one JSON document per project on disk, mirrored by an
//! in-memory map for reads. The map is rebuilt from disk at startup, so the
//! registry survives restarts without a database.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use cda_application::ports::infrastructure::ProjectRegistry;
use cda_domain::entities::{Project, ProjectSummary};
use cda_domain::error::{Error, Result};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::constants::PROJECT_RECORD_FILENAME;

/// Filesystem implementation of the project registry port
pub struct FilesystemProjectRegistry {
    root: PathBuf,
    cache: RwLock<HashMap<String, Project>>,
}

impl FilesystemProjectRegistry {
    /// Open the registry, loading every existing record into memory
    ///
    /// Unreadable records are skipped with a warning rather than failing
    /// startup; their blob directories remain on disk for inspection.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;

        let mut cache = HashMap::new();
        let mut entries = fs::read_dir(&root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let record_path = entry.path().join(PROJECT_RECORD_FILENAME);
            let bytes = match fs::read(&record_path).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            };
            match serde_json::from_slice::<Project>(&bytes) {
                Ok(project) => {
                    cache.insert(project.id.clone(), project);
                }
                Err(err) => {
                    warn!(path = %record_path.display(), error = %err, "skipping unreadable project record");
                }
            }
        }

        info!(projects = cache.len(), root = %root.display(), "project registry opened");
        Ok(Self {
            root,
            cache: RwLock::new(cache),
        })
    }

    fn record_path(&self, project_id: &str) -> PathBuf {
        self.root.join(project_id).join(PROJECT_RECORD_FILENAME)
    }
}

#[async_trait]
impl ProjectRegistry for FilesystemProjectRegistry {
    async fn upsert(&self, project: &Project) -> Result<()> {
        let path = self.record_path(&project.id);
        let parent = path
            .parent()
            .ok_or_else(|| Error::storage("record path has no parent"))?;
        fs::create_dir_all(parent).await?;

        let body = serde_json::to_vec_pretty(project)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &body).await?;
        fs::rename(&tmp, &path).await?;

        self.cache
            .write()
            .await
            .insert(project.id.clone(), project.clone());
        debug!(project_id = %project.id, revision = project.revision, "project record upserted");
        Ok(())
    }

    async fn get(&self, project_id: &str) -> Result<Project> {
        self.cache
            .read()
            .await
            .get(project_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("project {project_id}")))
    }

    async fn find_by_filename(&self, file_name: &str) -> Result<Option<Project>> {
        Ok(self
            .cache
            .read()
            .await
            .values()
            .find(|p| p.file_name == file_name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ProjectSummary>> {
        let mut summaries: Vec<ProjectSummary> = self
            .cache
            .read()
            .await
            .values()
            .map(Project::summary)
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn delete(&self, project_id: &str) -> Result<bool> {
        let existed = self.cache.write().await.remove(project_id).is_some();
        if existed {
            match fs::remove_file(self.record_path(project_id)).await {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cda_domain::value_objects::Language;

    #[tokio::test]
    async fn test_upsert_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FilesystemProjectRegistry::open(dir.path()).await.unwrap();

        let project = Project::new("sample.py", Language::Python, 42);
        registry.upsert(&project).await.unwrap();

        let fetched = registry.get(&project.id).await.unwrap();
        assert_eq!(fetched.file_name, "sample.py");
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new("sample.py", Language::Python, 42);
        {
            let registry = FilesystemProjectRegistry::open(dir.path()).await.unwrap();
            registry.upsert(&project).await.unwrap();
        }

        let reopened = FilesystemProjectRegistry::open(dir.path()).await.unwrap();
        let fetched = reopened.get(&project.id).await.unwrap();
        assert_eq!(fetched.id, project.id);
    }

    #[tokio::test]
    async fn test_find_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FilesystemProjectRegistry::open(dir.path()).await.unwrap();
        let project = Project::new("one.py", Language::Python, 1);
        registry.upsert(&project).await.unwrap();

        let found = registry.find_by_filename("one.py").await.unwrap();
        assert_eq!(found.map(|p| p.id), Some(project.id));
        assert!(registry.find_by_filename("two.py").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FilesystemProjectRegistry::open(dir.path()).await.unwrap();
        let project = Project::new("one.py", Language::Python, 1);
        registry.upsert(&project).await.unwrap();

        assert!(registry.delete(&project.id).await.unwrap());
        assert!(!registry.delete(&project.id).await.unwrap());
        assert!(matches!(
            registry.get(&project.id).await.unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_orders_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FilesystemProjectRegistry::open(dir.path()).await.unwrap();

        let older = Project::new("a.py", Language::Python, 1);
        registry.upsert(&older).await.unwrap();
        let mut newer = Project::new("b.py", Language::Python, 1);
        newer.begin_revision(2);
        registry.upsert(&newer).await.unwrap();

        let listed = registry.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].file_name, "b.py");
    }
}
