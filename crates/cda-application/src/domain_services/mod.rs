//! Domain Services
//!
//! Pure services with no I/O: heuristic unit extraction, change detection
//! between snapshots, prompt rendering for each pipeline stage, and final
//! document assembly.

/// Final document assembly
pub mod assembly;
/// Change detection between source snapshots
pub mod change_detection;
/// Heuristic code unit extraction strategies
pub mod extraction;
/// Prompt rendering for pipeline stages
pub mod prompts;

pub use assembly::assemble_document;
pub use change_detection::ChangeDetector;
pub use extraction::{extractor_for, UnitExtractor};
pub use prompts::StageContext;
