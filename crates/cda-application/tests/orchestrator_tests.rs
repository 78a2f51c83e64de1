//! Workflow orchestration tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cda_application::domain_services::StageContext;
use cda_application::pipeline::{StageExecutor, WorkflowOrchestrator};
use cda_application::ports::providers::{GenerationProvider, GenerationRequest};
use cda_domain::entities::ArtifactKind;
use cda_domain::error::{Error, Result};
use cda_domain::value_objects::{Language, StageKind, StageStatus, SubmissionStatus};

/// Provider that fails a configured set of stages and records every call
struct ScriptedProvider {
    fail_stages: HashSet<StageKind>,
    calls: Mutex<Vec<StageKind>>,
    call_count: AtomicUsize,
}

impl ScriptedProvider {
    fn new(fail_stages: impl IntoIterator<Item = StageKind>) -> Self {
        Self {
            fail_stages: fail_stages.into_iter().collect(),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> Vec<StageKind> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    async fn generate(&self, stage: StageKind, _request: &GenerationRequest) -> Result<String> {
        self.calls.lock().unwrap().push(stage);
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_stages.contains(&stage) {
            Err(Error::generation(format!("scripted failure in {stage}")))
        } else {
            Ok(format!("output of {stage}"))
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

fn orchestrator(provider: Arc<ScriptedProvider>) -> WorkflowOrchestrator {
    WorkflowOrchestrator::new(StageExecutor::new(provider, Duration::from_secs(5)))
}

fn context() -> StageContext {
    StageContext::new("sample", Language::Python, "def f():\n    pass\n", None)
}

#[tokio::test]
async fn test_all_stages_succeed_completes() {
    let provider = Arc::new(ScriptedProvider::new([]));
    let outcome = orchestrator(provider.clone()).run(context(), None).await;

    assert_eq!(outcome.status, SubmissionStatus::Completed);
    assert_eq!(outcome.stages.len(), 5);
    assert!(outcome.stages.iter().all(|s| s.is_success()));
    assert_eq!(provider.call_count.load(Ordering::SeqCst), 5);
    assert!(outcome.artifacts.is_complete());
    assert!(outcome.artifacts.get(ArtifactKind::Assembled).is_some());
}

#[tokio::test]
async fn test_parse_failure_skips_everything() {
    let provider = Arc::new(ScriptedProvider::new([StageKind::Parse]));
    let outcome = orchestrator(provider.clone()).run(context(), None).await;

    assert_eq!(outcome.status, SubmissionStatus::Failed);
    // Exactly one provider call: the failed parse
    assert_eq!(provider.call_count.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.stages.len(), 5);
    for result in &outcome.stages[1..] {
        assert_eq!(result.status, StageStatus::Skipped);
    }
    assert!(outcome.artifacts.present_kinds().is_empty());
}

#[tokio::test]
async fn test_diagram_failure_is_partial() {
    let provider = Arc::new(ScriptedProvider::new([StageKind::Diagram]));
    let outcome = orchestrator(provider.clone()).run(context(), None).await;

    assert_eq!(outcome.status, SubmissionStatus::PartiallyCompleted);
    // Validate still ran despite the diagram failure
    assert_eq!(provider.call_count.load(Ordering::SeqCst), 5);
    assert!(outcome.stage(StageKind::Markdown).unwrap().is_success());
    assert_eq!(
        outcome.stage(StageKind::Diagram).unwrap().status,
        StageStatus::Failed
    );
    assert!(outcome.stage(StageKind::Validate).unwrap().is_success());
    assert!(outcome.artifacts.get(ArtifactKind::Diagram).is_none());
    assert!(outcome.artifacts.get(ArtifactKind::Markdown).is_some());
    assert!(outcome.artifacts.get(ArtifactKind::Assembled).is_some());
}

#[tokio::test]
async fn test_docstring_failure_does_not_block_siblings() {
    let provider = Arc::new(ScriptedProvider::new([StageKind::Docstring]));
    let outcome = orchestrator(provider.clone()).run(context(), None).await;

    assert_eq!(outcome.status, SubmissionStatus::PartiallyCompleted);
    assert_eq!(provider.call_count.load(Ordering::SeqCst), 5);
    assert!(outcome.stage(StageKind::Markdown).unwrap().is_success());
    assert!(outcome.stage(StageKind::Diagram).unwrap().is_success());
    assert!(outcome.stage(StageKind::Validate).unwrap().is_success());
}

#[tokio::test]
async fn test_dispatch_order_respects_graph() {
    let provider = Arc::new(ScriptedProvider::new([]));
    orchestrator(provider.clone()).run(context(), None).await;

    let calls = provider.calls();
    assert_eq!(calls[0], StageKind::Parse);
    assert_eq!(calls[1], StageKind::Docstring);
    assert_eq!(calls[4], StageKind::Validate);
    // Markdown and Diagram land in between, in either order
    let middle: HashSet<StageKind> = calls[2..4].iter().copied().collect();
    assert_eq!(
        middle,
        HashSet::from([StageKind::Markdown, StageKind::Diagram])
    );
}

#[tokio::test]
async fn test_stage_timeout_fails_stage() {
    struct SlowProvider;

    #[async_trait]
    impl GenerationProvider for SlowProvider {
        async fn generate(
            &self,
            stage: StageKind,
            _request: &GenerationRequest,
        ) -> Result<String> {
            if stage == StageKind::Diagram {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(format!("output of {stage}"))
        }

        fn provider_name(&self) -> &str {
            "slow"
        }
    }

    tokio::time::pause();
    let executor = StageExecutor::new(Arc::new(SlowProvider), Duration::from_millis(50));
    let outcome = WorkflowOrchestrator::new(executor).run(context(), None).await;

    assert_eq!(outcome.status, SubmissionStatus::PartiallyCompleted);
    let diagram = outcome.stage(StageKind::Diagram).unwrap();
    assert_eq!(diagram.status, StageStatus::Failed);
    assert!(diagram.error.as_deref().unwrap_or("").contains("timed out"));
}
