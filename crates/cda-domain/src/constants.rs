//! Domain layer constants
//!
//! Constants that are part of the documentation pipeline's business rules.
//! Infrastructure-specific values (paths, ports, timeouts) live in the
//! infrastructure configuration instead.

// ============================================================================
// PIPELINE DOMAIN CONSTANTS
// ============================================================================

/// Snapshot revisions retained per project (current + previous for diffing)
pub const SNAPSHOT_RETENTION: u64 = 2;

/// Maximum characters of upstream analysis forwarded to the diagram stage
pub const DIAGRAM_CONTEXT_MAX_CHARS: usize = 3_000;

/// Maximum characters of docstring/markdown output forwarded to validation
pub const VALIDATION_CONTEXT_MAX_CHARS: usize = 2_000;
