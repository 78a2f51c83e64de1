//! Source submission and pipeline execution
//!
//! The submission service owns the end-to-end flow for one upload:
//! validation, revision bookkeeping, snapshot persistence, change
//! detection, the pipeline run, artifact persistence, and the final
//! registry upsert. The upsert happens last so a crash mid-flow leaves at
//! worst orphaned blobs, never a registry record pointing at missing data.
//!
//! Submissions for the same filename are serialized through a per-filename
//! async lock; submissions for different filenames run concurrently. A
//! filename's lock entry is dropped once no submission holds or waits on
//! it, so the lock map only ever covers in-flight filenames.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cda_domain::constants::SNAPSHOT_RETENTION;
use cda_domain::entities::{Project, SourceSnapshot};
use cda_domain::error::{Error, Result};
use cda_domain::value_objects::{ChangeReport, Language, StageResult, SubmissionStatus};
use tracing::{info, instrument, warn};

use crate::domain_services::{ChangeDetector, StageContext};
use crate::pipeline::WorkflowOrchestrator;
use crate::ports::infrastructure::{ArtifactStore, ProjectRegistry};

/// Result of one submission, returned to the caller
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// The project record as persisted
    pub project: Project,
    /// Per-stage results of the pipeline run
    pub stages: Vec<StageResult>,
    /// Change report for this revision
    pub change: ChangeReport,
}

/// Handles source uploads end to end
pub struct SubmissionService {
    registry: Arc<dyn ProjectRegistry>,
    store: Arc<dyn ArtifactStore>,
    orchestrator: WorkflowOrchestrator,
    detector: ChangeDetector,
    // Per-filename serialization; the map itself is only locked briefly
    file_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl SubmissionService {
    /// Wire the service to its ports
    pub fn new(
        registry: Arc<dyn ProjectRegistry>,
        store: Arc<dyn ArtifactStore>,
        orchestrator: WorkflowOrchestrator,
    ) -> Self {
        Self {
            registry,
            store,
            orchestrator,
            detector: ChangeDetector::new(),
            file_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Submit one source file for documentation
    ///
    /// Re-submission of a known filename updates the existing project under
    /// the same id and produces a change report against the previous
    /// revision; a first submission is a baseline.
    #[instrument(skip_all, fields(file_name = %file_name))]
    pub async fn submit(&self, file_name: &str, content: &str) -> Result<SubmissionOutcome> {
        if file_name.trim().is_empty() {
            return Err(Error::validation("file name must not be empty"));
        }
        if content.trim().is_empty() {
            return Err(Error::validation("uploaded file is empty"));
        }
        let language = Language::from_filename(file_name).ok_or_else(|| {
            Error::validation(format!(
                "unsupported file type: {file_name} (supported extensions: {})",
                Language::supported_extensions().join(", ")
            ))
        })?;

        let lock = self.lock_for(file_name);
        let guard = lock.lock().await;
        let result = self.process(file_name, content, language).await;
        drop(guard);
        self.release_lock(file_name, &lock);
        result
    }

    /// Number of filenames with an in-flight submission lock
    pub fn active_file_locks(&self) -> usize {
        self.file_locks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    async fn process(
        &self,
        file_name: &str,
        content: &str,
        language: Language,
    ) -> Result<SubmissionOutcome> {
        let mut project = match self.registry.find_by_filename(file_name).await? {
            Some(existing) => {
                info!(project_id = %existing.id, revision = existing.revision, "updating existing project");
                existing
            }
            None => Project::new(file_name, language, content.len() as u64),
        };
        let revision = project.begin_revision(content.len() as u64);

        let previous = if revision > 1 {
            match self.store.get_snapshot(&project.id, revision - 1).await {
                Ok(snapshot) => Some(snapshot),
                Err(Error::NotFound { .. }) => {
                    warn!(revision = revision - 1, "previous snapshot missing, treating as baseline");
                    None
                }
                Err(err) => return Err(err),
            }
        } else {
            None
        };

        let current = SourceSnapshot::new(file_name, revision, content);
        self.store.put_snapshot(&project.id, &current).await?;

        let change = self
            .detector
            .detect(previous.as_ref(), &current, language);
        info!(changed = change.changed, summary = %change.summary, "change detection complete");

        let change_context = change.changed.then(|| change.to_markdown());
        let ctx = StageContext::new(&project.name, language, content, change_context);
        let outcome = self.orchestrator.run(ctx, Some(&change)).await;

        if outcome.status == SubmissionStatus::Failed {
            // Keep artifacts from the prior successful run, if any
            project.fail_revision(change.clone());
        } else {
            for kind in outcome.artifacts.present_kinds() {
                if let Some(body) = outcome.artifacts.get(kind) {
                    self.store.put_artifact(&project.id, kind, body).await?;
                }
            }
            project.complete_revision(outcome.status, outcome.artifacts.clone(), change.clone());
        }

        self.store
            .trim_snapshots(&project.id, SNAPSHOT_RETENTION)
            .await?;
        self.registry.upsert(&project).await?;

        info!(project_id = %project.id, status = %project.status, "submission persisted");
        Ok(SubmissionOutcome {
            project,
            stages: outcome.stages,
            change,
        })
    }

    fn lock_for(&self, file_name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.file_locks.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .entry(file_name.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    fn release_lock(&self, file_name: &str, lock: &Arc<tokio::sync::Mutex<()>>) {
        let mut locks = self.file_locks.lock().unwrap_or_else(|e| e.into_inner());
        // Two handles means the map entry plus ours; any more and another
        // submission for this filename is holding or waiting on the lock.
        // Cloning out of the map requires the map mutex we hold here, so
        // the count cannot grow under us.
        if Arc::strong_count(lock) == 2 {
            locks.remove(file_name);
        }
    }
}
