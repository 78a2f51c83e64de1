//! Change tracking value objects
//!
//! A [`ChangeReport`] summarizes the structural difference between the
//! previous and current snapshot of the same logical file: which top-level
//! units (functions, classes, methods) were added, removed, or modified.
//! It is a value, produced once per submission, not an entity with identity.

use serde::{Deserialize, Serialize};

/// Coarse classification of an extracted code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Free-standing function
    Function,
    /// Class or type declaration
    Class,
    /// Method belonging to a class
    Method,
    /// Anything the heuristic could not classify (including whole-file fallback)
    Other,
}

impl UnitKind {
    /// Display label used in rendered change summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Class => "Class",
            Self::Method => "Method",
            Self::Other => "Other",
        }
    }
}

/// A top-level code unit extracted from source text by heuristic
///
/// Extraction is deliberately lightweight - signature-level regex matching,
/// not parsing. When no units are detected at all, the whole file is treated
/// as a single `Other` unit named after the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeUnit {
    /// Classification of the unit
    pub kind: UnitKind,
    /// Unit name (for methods, `Class.method`)
    pub name: String,
    /// Signature line as it appears in the source
    pub signature: String,
    /// Body text, used to detect modifications
    pub body: String,
}

impl CodeUnit {
    /// Create a new code unit
    pub fn new(
        kind: UnitKind,
        name: impl Into<String>,
        signature: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            signature: signature.into(),
            body: body.into(),
        }
    }

    /// Matching key: units pair up by kind and name across revisions
    pub fn key(&self) -> (UnitKind, &str) {
        (self.kind, &self.name)
    }
}

/// One added, removed, or modified unit in a change report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitChange {
    /// Classification of the changed unit
    pub kind: UnitKind,
    /// Unit name
    pub name: String,
    /// Signature in the revision where the unit exists
    /// (for modifications, the current revision's signature)
    pub signature: String,
}

impl UnitChange {
    /// Create a change descriptor from an extracted unit
    pub fn from_unit(unit: &CodeUnit) -> Self {
        Self {
            kind: unit.kind,
            name: unit.name.clone(),
            signature: unit.signature.clone(),
        }
    }
}

/// Structural diff between the previous and current snapshot of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    /// True iff any unit was added, removed, or modified
    pub changed: bool,
    /// True only for the first submission of a filename (no previous snapshot)
    pub baseline: bool,
    /// Units present in current but not previous, in order of appearance
    pub added: Vec<UnitChange>,
    /// Units present in previous but not current, in order of appearance
    pub removed: Vec<UnitChange>,
    /// Units present in both with differing signature or body
    pub modified: Vec<UnitChange>,
    /// Human-readable one-line summary
    pub summary: String,
}

impl ChangeReport {
    /// Report for a first-time upload: there is no previous snapshot, so the
    /// submission is a baseline rather than a change (`changed = false`)
    pub fn baseline() -> Self {
        Self {
            changed: false,
            baseline: true,
            added: Vec::new(),
            removed: Vec::new(),
            modified: Vec::new(),
            summary: "initial upload".to_string(),
        }
    }

    /// Build a report from change lists, computing the flag and summary
    pub fn from_changes(
        added: Vec<UnitChange>,
        removed: Vec<UnitChange>,
        modified: Vec<UnitChange>,
    ) -> Self {
        let changed = !(added.is_empty() && removed.is_empty() && modified.is_empty());
        let summary = Self::summarize(&added, &removed, &modified);
        Self {
            changed,
            baseline: false,
            added,
            removed,
            modified,
            summary,
        }
    }

    fn summarize(added: &[UnitChange], removed: &[UnitChange], modified: &[UnitChange]) -> String {
        let mut parts = Vec::new();
        if !added.is_empty() {
            parts.push(format!("{} addition(s)", added.len()));
        }
        if !removed.is_empty() {
            parts.push(format!("{} deletion(s)", removed.len()));
        }
        if !modified.is_empty() {
            parts.push(format!("{} modification(s)", modified.len()));
        }
        if parts.is_empty() {
            "No changes detected".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Render the report as a Markdown section for the assembled document
    pub fn to_markdown(&self) -> String {
        let mut md = String::from("## Code Changes Detected\n\n");
        md.push_str(&format!("**Summary:** {}\n\n", self.summary));

        if !self.added.is_empty() {
            md.push_str("### Additions\n");
            for item in &self.added {
                md.push_str(&format!("- **{}**: `{}`\n", item.kind.label(), item.name));
            }
            md.push('\n');
        }

        if !self.removed.is_empty() {
            md.push_str("### Deletions\n");
            for item in &self.removed {
                md.push_str(&format!("- **{}**: `{}`\n", item.kind.label(), item.name));
            }
            md.push('\n');
        }

        if !self.modified.is_empty() {
            md.push_str("### Modifications\n");
            for item in &self.modified {
                md.push_str(&format!("- **{}**: `{}`\n", item.kind.label(), item.name));
            }
            md.push('\n');
        }

        md
    }
}
