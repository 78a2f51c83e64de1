//! Documentation Pipeline
//!
//! Execution of the fixed five-stage workflow graph. The stage executor
//! wraps single provider calls with timing and timeout handling; the
//! orchestrator wires the stages together according to the graph's
//! dependency edges.

/// Workflow orchestration across stages
pub mod orchestrator;
/// Single stage execution with timing and timeout
pub mod stage;

pub use orchestrator::{WorkflowOrchestrator, WorkflowOutcome};
pub use stage::StageExecutor;
