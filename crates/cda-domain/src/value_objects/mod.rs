//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Language`] | Programming language identifier detected from extension |
//! | [`ChangeReport`] | Structural diff between two source snapshots |
//! | [`CodeUnit`] | Top-level code unit extracted by heuristic |
//! | [`StageResult`] | Outcome of one pipeline stage |
//! | [`SubmissionStatus`] | State machine for a whole submission |

/// Change tracking value objects
pub mod change;
/// Programming language identification
pub mod language;
/// Pipeline stage value objects
pub mod stage;

pub use change::{ChangeReport, CodeUnit, UnitChange, UnitKind};
pub use language::Language;
pub use stage::{StageKind, StageResult, StageStatus, SubmissionStatus};
