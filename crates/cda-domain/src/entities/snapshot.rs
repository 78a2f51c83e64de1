//! Immutable source snapshots
//!
//! Every submission produces exactly one new snapshot. The previous snapshot
//! is retained (not overwritten) so the change detector can diff against it;
//! older revisions are trimmed by the store's retention policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable copy of a submitted file's content at one revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Original filename of the upload
    pub file_name: String,
    /// Monotonic revision counter, starting at 1 for the first upload
    pub revision: u64,
    /// Full text content of the upload
    pub content: String,
    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,
}

impl SourceSnapshot {
    /// Create a snapshot for the given revision, timestamped now
    pub fn new(file_name: impl Into<String>, revision: u64, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            revision,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
