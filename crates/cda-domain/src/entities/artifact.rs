//! Generated documentation artifact set
//!
//! One pipeline run produces one [`DocumentationArtifactSet`]. Each slot is
//! independently nullable: a failed stage leaves its slot empty while sibling
//! stages keep theirs. The set is replaced wholesale on regeneration - there
//! is no partial merge across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a generated documentation artifact, used as the storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Structural code analysis (parse stage output)
    Analysis,
    /// Source code annotated with generated docstrings
    Docstrings,
    /// Markdown API documentation
    Markdown,
    /// Mermaid diagram source
    Diagram,
    /// Validation report
    Validation,
    /// Locally assembled combined document
    Assembled,
}

impl ArtifactKind {
    /// Stable identifier used for storage keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Docstrings => "docstrings",
            Self::Markdown => "markdown",
            Self::Diagram => "diagram",
            Self::Validation => "validation",
            Self::Assembled => "assembled",
        }
    }

    /// Filename used when the artifact is exported in an archive
    pub fn export_name(&self) -> &'static str {
        match self {
            Self::Analysis => "analysis.md",
            Self::Docstrings => "documented_source.txt",
            Self::Markdown => "api_documentation.md",
            Self::Diagram => "diagrams.mmd",
            Self::Validation => "validation_report.md",
            Self::Assembled => "documentation.md",
        }
    }

    /// All artifact kinds
    pub fn all() -> [ArtifactKind; 6] {
        [
            Self::Analysis,
            Self::Docstrings,
            Self::Markdown,
            Self::Diagram,
            Self::Validation,
            Self::Assembled,
        ]
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The generated outputs of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationArtifactSet {
    /// Parse stage output
    pub analysis: Option<String>,
    /// Docstring stage output
    pub docstrings: Option<String>,
    /// Markdown stage output
    pub markdown: Option<String>,
    /// Diagram stage output
    pub diagram: Option<String>,
    /// Validation stage output
    pub validation: Option<String>,
    /// Assembled combined document (built locally, no provider call)
    pub assembled: Option<String>,
    /// When this set was generated
    pub generated_at: Option<DateTime<Utc>>,
}

impl DocumentationArtifactSet {
    /// Access a slot by artifact kind
    pub fn get(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Analysis => self.analysis.as_deref(),
            ArtifactKind::Docstrings => self.docstrings.as_deref(),
            ArtifactKind::Markdown => self.markdown.as_deref(),
            ArtifactKind::Diagram => self.diagram.as_deref(),
            ArtifactKind::Validation => self.validation.as_deref(),
            ArtifactKind::Assembled => self.assembled.as_deref(),
        }
    }

    /// Set a slot by artifact kind
    pub fn set(&mut self, kind: ArtifactKind, content: impl Into<String>) {
        let value = Some(content.into());
        match kind {
            ArtifactKind::Analysis => self.analysis = value,
            ArtifactKind::Docstrings => self.docstrings = value,
            ArtifactKind::Markdown => self.markdown = value,
            ArtifactKind::Diagram => self.diagram = value,
            ArtifactKind::Validation => self.validation = value,
            ArtifactKind::Assembled => self.assembled = value,
        }
    }

    /// Whether every generated slot is filled
    pub fn is_complete(&self) -> bool {
        self.analysis.is_some()
            && self.docstrings.is_some()
            && self.markdown.is_some()
            && self.diagram.is_some()
            && self.validation.is_some()
    }

    /// Kinds whose slots are filled, in canonical order
    pub fn present_kinds(&self) -> Vec<ArtifactKind> {
        ArtifactKind::all()
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }
}
