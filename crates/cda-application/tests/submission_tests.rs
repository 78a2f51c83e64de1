//! Submission flow tests with in-memory ports

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cda_application::pipeline::{StageExecutor, WorkflowOrchestrator};
use cda_application::ports::infrastructure::{ArtifactStore, ProjectRegistry};
use cda_application::ports::providers::{GenerationProvider, GenerationRequest};
use cda_application::use_cases::{ProjectService, SubmissionService};
use cda_domain::entities::{ArtifactKind, Project, ProjectSummary, SourceSnapshot};
use cda_domain::error::{Error, Result};
use cda_domain::value_objects::{StageKind, SubmissionStatus};

#[derive(Default)]
struct InMemoryRegistry {
    projects: Mutex<HashMap<String, Project>>,
}

#[async_trait]
impl ProjectRegistry for InMemoryRegistry {
    async fn upsert(&self, project: &Project) -> Result<()> {
        self.projects
            .lock()
            .unwrap()
            .insert(project.id.clone(), project.clone());
        Ok(())
    }

    async fn get(&self, project_id: &str) -> Result<Project> {
        self.projects
            .lock()
            .unwrap()
            .get(project_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("project {project_id}")))
    }

    async fn find_by_filename(&self, file_name: &str) -> Result<Option<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .values()
            .find(|p| p.file_name == file_name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ProjectSummary>> {
        let mut summaries: Vec<ProjectSummary> = self
            .projects
            .lock()
            .unwrap()
            .values()
            .map(Project::summary)
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn delete(&self, project_id: &str) -> Result<bool> {
        Ok(self.projects.lock().unwrap().remove(project_id).is_some())
    }
}

#[derive(Default)]
struct InMemoryStore {
    artifacts: Mutex<HashMap<(String, ArtifactKind), String>>,
    snapshots: Mutex<HashMap<(String, u64), SourceSnapshot>>,
}

#[async_trait]
impl ArtifactStore for InMemoryStore {
    async fn put_artifact(
        &self,
        project_id: &str,
        kind: ArtifactKind,
        content: &str,
    ) -> Result<()> {
        self.artifacts
            .lock()
            .unwrap()
            .insert((project_id.to_string(), kind), content.to_string());
        Ok(())
    }

    async fn get_artifact(&self, project_id: &str, kind: ArtifactKind) -> Result<String> {
        self.artifacts
            .lock()
            .unwrap()
            .get(&(project_id.to_string(), kind))
            .cloned()
            .ok_or_else(|| Error::not_found(format!("artifact {kind} for {project_id}")))
    }

    async fn put_snapshot(&self, project_id: &str, snapshot: &SourceSnapshot) -> Result<()> {
        self.snapshots
            .lock()
            .unwrap()
            .insert((project_id.to_string(), snapshot.revision), snapshot.clone());
        Ok(())
    }

    async fn get_snapshot(&self, project_id: &str, revision: u64) -> Result<SourceSnapshot> {
        self.snapshots
            .lock()
            .unwrap()
            .get(&(project_id.to_string(), revision))
            .cloned()
            .ok_or_else(|| Error::not_found(format!("snapshot r{revision} for {project_id}")))
    }

    async fn trim_snapshots(&self, project_id: &str, keep_latest: u64) -> Result<()> {
        let mut snapshots = self.snapshots.lock().unwrap();
        let mut revisions: Vec<u64> = snapshots
            .keys()
            .filter(|(id, _)| id == project_id)
            .map(|(_, rev)| *rev)
            .collect();
        revisions.sort_unstable();
        let keep = usize::try_from(keep_latest).unwrap_or(usize::MAX);
        for rev in revisions.iter().rev().skip(keep) {
            snapshots.remove(&(project_id.to_string(), *rev));
        }
        Ok(())
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.artifacts
            .lock()
            .unwrap()
            .retain(|(id, _), _| id != project_id);
        self.snapshots
            .lock()
            .unwrap()
            .retain(|(id, _), _| id != project_id);
        Ok(())
    }
}

/// Echo provider; optionally fails the parse stage
struct EchoProvider {
    fail_parse: bool,
}

#[async_trait]
impl GenerationProvider for EchoProvider {
    async fn generate(&self, stage: StageKind, _request: &GenerationRequest) -> Result<String> {
        if self.fail_parse && stage == StageKind::Parse {
            return Err(Error::generation("parse rejected"));
        }
        Ok(format!("generated {stage}"))
    }

    fn provider_name(&self) -> &str {
        "echo"
    }
}

struct Harness {
    registry: Arc<InMemoryRegistry>,
    store: Arc<InMemoryStore>,
    service: SubmissionService,
}

fn harness(fail_parse: bool) -> Harness {
    let registry = Arc::new(InMemoryRegistry::default());
    let store = Arc::new(InMemoryStore::default());
    let executor = StageExecutor::new(
        Arc::new(EchoProvider { fail_parse }),
        Duration::from_secs(5),
    );
    let service = SubmissionService::new(
        registry.clone(),
        store.clone(),
        WorkflowOrchestrator::new(executor),
    );
    Harness {
        registry,
        store,
        service,
    }
}

#[tokio::test]
async fn test_first_submission_creates_project() {
    let h = harness(false);
    let outcome = h
        .service
        .submit("sample.py", "def f():\n    pass\n")
        .await
        .unwrap();

    assert_eq!(outcome.project.revision, 1);
    assert_eq!(outcome.project.status, SubmissionStatus::Completed);
    assert!(outcome.change.baseline);
    assert!(!outcome.change.changed);

    let stored = h.registry.get(&outcome.project.id).await.unwrap();
    assert!(stored.artifacts.is_some());
    let doc = h
        .store
        .get_artifact(&stored.id, ArtifactKind::Assembled)
        .await
        .unwrap();
    assert!(doc.contains("sample - Documentation"));
}

#[tokio::test]
async fn test_resubmission_keeps_project_id_and_reports_changes() {
    let h = harness(false);
    let first = h
        .service
        .submit("sample.py", "def f():\n    pass\n")
        .await
        .unwrap();
    let second = h
        .service
        .submit("sample.py", "def f():\n    pass\n\ndef g():\n    pass\n")
        .await
        .unwrap();

    assert_eq!(first.project.id, second.project.id);
    assert_eq!(second.project.revision, 2);
    assert!(second.change.changed);
    assert_eq!(second.change.added.len(), 1);
    assert_eq!(second.change.added[0].name, "g");
}

#[tokio::test]
async fn test_empty_content_rejected() {
    let h = harness(false);
    let err = h.service.submit("sample.py", "   \n").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn test_unsupported_extension_rejected() {
    let h = harness(false);
    let err = h.service.submit("notes.txt", "hello").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn test_parse_failure_persists_failed_project_without_artifacts() {
    let h = harness(true);
    let outcome = h
        .service
        .submit("sample.py", "def f():\n    pass\n")
        .await
        .unwrap();

    assert_eq!(outcome.project.status, SubmissionStatus::Failed);
    assert!(outcome.project.artifacts.is_none());
    // The record is still registered so the failure is visible
    let stored = h.registry.get(&outcome.project.id).await.unwrap();
    assert_eq!(stored.status, SubmissionStatus::Failed);
}

#[tokio::test]
async fn test_documentation_for_failed_run_is_not_found() {
    let h = harness(true);
    let outcome = h
        .service
        .submit("sample.py", "def f():\n    pass\n")
        .await
        .unwrap();

    let projects = ProjectService::new(h.registry.clone(), h.store.clone());
    let err = projects
        .documentation(&outcome.project.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    let err = projects
        .archive_entries(&outcome.project.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_file_locks_released_after_submission() {
    let h = harness(false);
    h.service
        .submit("sample.py", "def f():\n    pass\n")
        .await
        .unwrap();
    h.service
        .submit("other.rs", "fn main() {}\n")
        .await
        .unwrap();

    assert_eq!(h.service.active_file_locks(), 0);
}

#[tokio::test]
async fn test_snapshot_retention_keeps_two_revisions() {
    let h = harness(false);
    let mut id = String::new();
    for i in 0..3 {
        let outcome = h
            .service
            .submit("sample.py", &format!("def f():\n    return {i}\n"))
            .await
            .unwrap();
        id = outcome.project.id;
    }

    assert!(h.store.get_snapshot(&id, 1).await.is_err());
    assert!(h.store.get_snapshot(&id, 2).await.is_ok());
    assert!(h.store.get_snapshot(&id, 3).await.is_ok());
}
