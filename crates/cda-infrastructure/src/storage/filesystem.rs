//! Artifact and snapshot blob store
//!
//! Writes are atomic per blob: content goes to a temporary sibling file
//! first and is renamed into place, so readers never observe a partial
//! write. There is no cross-blob transaction.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cda_application::ports::infrastructure::ArtifactStore;
use cda_domain::entities::{ArtifactKind, SourceSnapshot};
use cda_domain::error::{Error, Result};
use tokio::fs;
use tracing::debug;

use crate::constants::{ARTIFACTS_DIR, SNAPSHOTS_DIR};

/// Filesystem implementation of the artifact store port
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create a store rooted at the given data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn artifact_path(&self, project_id: &str, kind: ArtifactKind) -> PathBuf {
        self.root
            .join(project_id)
            .join(ARTIFACTS_DIR)
            .join(kind.export_name())
    }

    fn snapshot_path(&self, project_id: &str, revision: u64) -> PathBuf {
        self.root
            .join(project_id)
            .join(SNAPSHOTS_DIR)
            .join(format!("{revision}.json"))
    }

    async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::storage(format!("blob path has no parent: {}", path.display())))?;
        fs::create_dir_all(parent).await?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }

    async fn read_or_not_found(path: &Path, what: String) -> Result<Vec<u8>> {
        match fs::read(path).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::not_found(what)),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl ArtifactStore for FilesystemArtifactStore {
    async fn put_artifact(
        &self,
        project_id: &str,
        kind: ArtifactKind,
        content: &str,
    ) -> Result<()> {
        let path = self.artifact_path(project_id, kind);
        Self::write_atomic(&path, content.as_bytes()).await?;
        debug!(project_id, kind = %kind, bytes = content.len(), "artifact written");
        Ok(())
    }

    async fn get_artifact(&self, project_id: &str, kind: ArtifactKind) -> Result<String> {
        let path = self.artifact_path(project_id, kind);
        let bytes =
            Self::read_or_not_found(&path, format!("artifact {kind} for project {project_id}"))
                .await?;
        String::from_utf8(bytes)
            .map_err(|e| Error::storage_with_source("artifact is not valid UTF-8", e))
    }

    async fn put_snapshot(&self, project_id: &str, snapshot: &SourceSnapshot) -> Result<()> {
        let path = self.snapshot_path(project_id, snapshot.revision);
        let body = serde_json::to_vec_pretty(snapshot)?;
        Self::write_atomic(&path, &body).await?;
        debug!(project_id, revision = snapshot.revision, "snapshot written");
        Ok(())
    }

    async fn get_snapshot(&self, project_id: &str, revision: u64) -> Result<SourceSnapshot> {
        let path = self.snapshot_path(project_id, revision);
        let bytes = Self::read_or_not_found(
            &path,
            format!("snapshot revision {revision} for project {project_id}"),
        )
        .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn trim_snapshots(&self, project_id: &str, keep_latest: u64) -> Result<()> {
        let dir = self.root.join(project_id).join(SNAPSHOTS_DIR);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        let mut revisions: Vec<u64> = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let path = Path::new(&name);
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(revision) = stem.parse::<u64>() {
                revisions.push(revision);
            }
        }
        revisions.sort_unstable();

        let keep = usize::try_from(keep_latest).unwrap_or(usize::MAX);
        for revision in revisions.iter().rev().skip(keep) {
            fs::remove_file(self.snapshot_path(project_id, *revision)).await?;
            debug!(project_id, revision, "snapshot trimmed");
        }
        Ok(())
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        let dir = self.root.join(project_id);
        match fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FilesystemArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemArtifactStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_artifact_round_trip() {
        let (_dir, store) = store();
        store
            .put_artifact("p1", ArtifactKind::Markdown, "# Docs")
            .await
            .unwrap();
        let body = store.get_artifact("p1", ArtifactKind::Markdown).await.unwrap();
        assert_eq!(body, "# Docs");
    }

    #[tokio::test]
    async fn test_missing_artifact_is_not_found() {
        let (_dir, store) = store();
        let err = store
            .get_artifact("p1", ArtifactKind::Analysis)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_put_artifact_replaces_prior_value() {
        let (_dir, store) = store();
        store
            .put_artifact("p1", ArtifactKind::Analysis, "old")
            .await
            .unwrap();
        store
            .put_artifact("p1", ArtifactKind::Analysis, "new")
            .await
            .unwrap();
        let body = store.get_artifact("p1", ArtifactKind::Analysis).await.unwrap();
        assert_eq!(body, "new");
    }

    #[tokio::test]
    async fn test_snapshot_round_trip_and_trim() {
        let (_dir, store) = store();
        for rev in 1..=4 {
            let snapshot = SourceSnapshot::new("a.py", rev, format!("rev {rev}"));
            store.put_snapshot("p1", &snapshot).await.unwrap();
        }
        store.trim_snapshots("p1", 2).await.unwrap();

        assert!(store.get_snapshot("p1", 1).await.is_err());
        assert!(store.get_snapshot("p1", 2).await.is_err());
        let kept = store.get_snapshot("p1", 3).await.unwrap();
        assert_eq!(kept.content, "rev 3");
        assert!(store.get_snapshot("p1", 4).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_project_removes_everything() {
        let (_dir, store) = store();
        store
            .put_artifact("p1", ArtifactKind::Markdown, "x")
            .await
            .unwrap();
        store.delete_project("p1").await.unwrap();
        assert!(store.get_artifact("p1", ArtifactKind::Markdown).await.is_err());
        // Deleting again is a no-op
        store.delete_project("p1").await.unwrap();
    }
}
