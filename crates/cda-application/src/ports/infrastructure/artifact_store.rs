//! Durable artifact and snapshot storage port
//!
//! Blob storage keyed by `(project_id, artifact_kind)` for generated
//! artifacts and `(project_id, revision)` for source snapshots. Writes for
//! one submission are independent per kind: the store does not provide a
//! batch transaction, so a crash mid-submission can leave orphaned blobs.
//! The registry upsert happens last, which keeps such orphans invisible.

use async_trait::async_trait;
use cda_domain::entities::{ArtifactKind, SourceSnapshot};
use cda_domain::error::Result;

/// Durable blob storage for artifacts and snapshots
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write one generated artifact for a project, replacing any prior value
    async fn put_artifact(&self, project_id: &str, kind: ArtifactKind, content: &str)
        -> Result<()>;

    /// Read one generated artifact; `Error::NotFound` when absent
    async fn get_artifact(&self, project_id: &str, kind: ArtifactKind) -> Result<String>;

    /// Write one immutable source snapshot
    async fn put_snapshot(&self, project_id: &str, snapshot: &SourceSnapshot) -> Result<()>;

    /// Read a snapshot by revision; `Error::NotFound` when absent
    async fn get_snapshot(&self, project_id: &str, revision: u64) -> Result<SourceSnapshot>;

    /// Drop snapshots older than the `keep_latest` most recent revisions
    async fn trim_snapshots(&self, project_id: &str, keep_latest: u64) -> Result<()>;

    /// Remove every blob belonging to a project
    async fn delete_project(&self, project_id: &str) -> Result<()>;
}
