//! Workflow orchestration across stages
//!
//! Runs the fixed graph `Parse -> Docstring -> {Markdown, Diagram} ->
//! Validate` for one submission. Dependency rules:
//!
//! - Parse failure aborts the run: every downstream stage is Skipped and
//!   zero further provider calls are made.
//! - Docstring failure does not block Markdown or Diagram; they run on the
//!   source plus whatever upstream output exists.
//! - Markdown and Diagram run concurrently.
//! - Validate always runs when Parse succeeded, noting missing inputs in
//!   its prompt rather than being skipped.
//!
//! The assembled document is built locally after the stages finish; it is
//! not a provider call and cannot fail the run.

use cda_domain::entities::{ArtifactKind, DocumentationArtifactSet};
use cda_domain::value_objects::{ChangeReport, StageKind, StageResult, SubmissionStatus};
use chrono::Utc;
use tracing::{info, instrument};

use crate::domain_services::{assemble_document, StageContext};
use crate::pipeline::StageExecutor;

/// Final result of one pipeline run
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    /// Terminal submission status
    pub status: SubmissionStatus,
    /// Per-stage results in dispatch order
    pub stages: Vec<StageResult>,
    /// Artifacts produced by the run; empty when Parse failed
    pub artifacts: DocumentationArtifactSet,
}

impl WorkflowOutcome {
    /// Result of a stage by kind
    pub fn stage(&self, kind: StageKind) -> Option<&StageResult> {
        self.stages.iter().find(|r| r.stage == kind)
    }
}

/// Drives the five-stage workflow for one submission
#[derive(Clone)]
pub struct WorkflowOrchestrator {
    executor: StageExecutor,
}

impl WorkflowOrchestrator {
    /// Create an orchestrator around a stage executor
    pub fn new(executor: StageExecutor) -> Self {
        Self { executor }
    }

    /// Run the full workflow
    ///
    /// `change` is the report for this revision; it feeds the assembled
    /// document's change section (the stage prompts receive their change
    /// context through `ctx` instead).
    #[instrument(skip_all, fields(project = %ctx.project_name, language = %ctx.language))]
    pub async fn run(&self, mut ctx: StageContext, change: Option<&ChangeReport>) -> WorkflowOutcome {
        let parse = self.executor.execute(StageKind::Parse, &ctx).await;
        if !parse.is_success() {
            info!("parse failed, skipping downstream stages");
            return WorkflowOutcome {
                status: SubmissionStatus::Failed,
                stages: vec![
                    parse,
                    StageResult::skipped(StageKind::Docstring),
                    StageResult::skipped(StageKind::Markdown),
                    StageResult::skipped(StageKind::Diagram),
                    StageResult::skipped(StageKind::Validate),
                ],
                artifacts: DocumentationArtifactSet::default(),
            };
        }
        ctx.analysis = parse.output.clone();

        let docstring = self.executor.execute(StageKind::Docstring, &ctx).await;
        ctx.docstrings = docstring.output.clone();

        let (markdown, diagram) = tokio::join!(
            self.executor.execute(StageKind::Markdown, &ctx),
            self.executor.execute(StageKind::Diagram, &ctx),
        );
        ctx.markdown = markdown.output.clone();
        ctx.diagram = diagram.output.clone();

        let validate = self.executor.execute(StageKind::Validate, &ctx).await;

        let stages = vec![parse, docstring, markdown, diagram, validate];
        let mut artifacts = DocumentationArtifactSet::default();
        for result in &stages {
            if let Some(output) = &result.output {
                artifacts.set(artifact_kind_for(result.stage), output.clone());
            }
        }

        let status = if stages.iter().all(StageResult::is_success) {
            SubmissionStatus::Completed
        } else {
            SubmissionStatus::PartiallyCompleted
        };

        let assembled =
            assemble_document(&ctx.project_name, ctx.language, &artifacts, change);
        artifacts.set(ArtifactKind::Assembled, assembled);
        artifacts.generated_at = Some(Utc::now());

        info!(status = %status, artifacts = artifacts.present_kinds().len(), "workflow finished");
        WorkflowOutcome {
            status,
            stages,
            artifacts,
        }
    }
}

fn artifact_kind_for(stage: StageKind) -> ArtifactKind {
    match stage {
        StageKind::Parse => ArtifactKind::Analysis,
        StageKind::Docstring => ArtifactKind::Docstrings,
        StageKind::Markdown => ArtifactKind::Markdown,
        StageKind::Diagram => ArtifactKind::Diagram,
        StageKind::Validate => ArtifactKind::Validation,
    }
}
