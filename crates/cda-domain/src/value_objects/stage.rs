//! Pipeline stage value objects
//!
//! The documentation pipeline is a fixed graph of five stages:
//!
//! ```text
//! Parse -> Docstring -> {Markdown, Diagram} -> Validate
//! ```
//!
//! Each stage produces a [`StageResult`]; the whole submission moves through
//! the [`SubmissionStatus`] state machine.

use serde::{Deserialize, Serialize};

/// One stage of the fixed documentation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Structural analysis of the uploaded code
    Parse,
    /// Docstring-annotated source generation
    Docstring,
    /// Markdown API documentation
    Markdown,
    /// Mermaid architecture diagrams
    Diagram,
    /// Documentation quality validation
    Validate,
}

impl StageKind {
    /// Stable identifier, also used as the tracing span field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Docstring => "docstring",
            Self::Markdown => "markdown",
            Self::Diagram => "diagram",
            Self::Validate => "validate",
        }
    }

    /// All stages in dispatch order
    pub fn all() -> [StageKind; 5] {
        [
            Self::Parse,
            Self::Docstring,
            Self::Markdown,
            Self::Diagram,
            Self::Validate,
        ]
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome classification of a single stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Stage produced an output payload
    Success,
    /// The provider call failed or timed out; error detail is recorded
    Failed,
    /// Stage was never dispatched because an upstream dependency failed
    Skipped,
}

/// Result of executing one pipeline stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResult {
    /// Which stage this result belongs to
    pub stage: StageKind,
    /// Outcome classification
    pub status: StageStatus,
    /// Output payload when the stage succeeded
    pub output: Option<String>,
    /// Error detail, recorded verbatim, when the stage failed
    pub error: Option<String>,
    /// Wall-clock duration of the stage in milliseconds
    pub elapsed_ms: u64,
}

impl StageResult {
    /// Successful stage with its output payload
    pub fn success(stage: StageKind, output: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            stage,
            status: StageStatus::Success,
            output: Some(output.into()),
            error: None,
            elapsed_ms,
        }
    }

    /// Failed stage with the error recorded verbatim
    pub fn failed(stage: StageKind, error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            stage,
            status: StageStatus::Failed,
            output: None,
            error: Some(error.into()),
            elapsed_ms,
        }
    }

    /// Stage that was never dispatched
    pub fn skipped(stage: StageKind) -> Self {
        Self {
            stage,
            status: StageStatus::Skipped,
            output: None,
            error: None,
            elapsed_ms: 0,
        }
    }

    /// Whether this stage produced an output
    pub fn is_success(&self) -> bool {
        self.status == StageStatus::Success
    }
}

/// State machine for one submission
///
/// `Pending -> Running -> {Completed | PartiallyCompleted | Failed}`
///
/// - `Completed`: every stage reported success.
/// - `PartiallyCompleted`: Parse succeeded but at least one downstream stage
///   failed; partial artifacts are persisted with failed slots marked.
/// - `Failed`: Parse itself failed; no downstream work was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Submission accepted, no stage started
    Pending,
    /// At least one stage dispatched
    Running,
    /// Every declared stage reported success
    Completed,
    /// Parse succeeded but at least one downstream stage failed
    PartiallyCompleted,
    /// Parse failed; no meaningful downstream work was possible
    Failed,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::PartiallyCompleted => "partially_completed",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}
