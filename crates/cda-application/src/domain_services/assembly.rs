//! Final document assembly
//!
//! Stitches the individual stage outputs into one self-contained Markdown
//! document. Assembly is deterministic and tolerant: sections whose stage
//! produced no output are rendered with a placeholder note instead of being
//! dropped, so a partially completed run still yields a readable document.

use cda_domain::entities::{ArtifactKind, DocumentationArtifactSet};
use cda_domain::value_objects::{ChangeReport, Language};
use chrono::Utc;

/// Assemble the complete documentation document from stage outputs
pub fn assemble_document(
    project_name: &str,
    language: Language,
    artifacts: &DocumentationArtifactSet,
    change: Option<&ChangeReport>,
) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {project_name} - Documentation\n\n"));
    doc.push_str(&format!("**Language:** {language}\n"));
    doc.push_str(&format!("**Documentation style:** {}\n", language.doc_style()));
    doc.push_str(&format!(
        "**Generated:** {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    if let Some(report) = change.filter(|r| r.changed) {
        doc.push_str("## Changes in This Revision\n\n");
        doc.push_str(&report.to_markdown());
        doc.push('\n');
    }

    doc.push_str("## Table of Contents\n\n");
    doc.push_str("1. [Code Analysis](#code-analysis)\n");
    doc.push_str("2. [API Documentation](#api-documentation)\n");
    doc.push_str("3. [Documented Source](#documented-source)\n");
    doc.push_str("4. [Architecture Diagrams](#architecture-diagrams)\n");
    doc.push_str("5. [Validation Report](#validation-report)\n\n");

    push_section(
        &mut doc,
        "Code Analysis",
        artifacts.get(ArtifactKind::Analysis),
    );
    push_section(
        &mut doc,
        "API Documentation",
        artifacts.get(ArtifactKind::Markdown),
    );
    push_code_section(
        &mut doc,
        "Documented Source",
        language,
        artifacts.get(ArtifactKind::Docstrings),
    );
    push_section(
        &mut doc,
        "Architecture Diagrams",
        artifacts.get(ArtifactKind::Diagram),
    );
    push_section(
        &mut doc,
        "Validation Report",
        artifacts.get(ArtifactKind::Validation),
    );

    doc
}

fn push_section(doc: &mut String, title: &str, content: Option<&str>) {
    doc.push_str(&format!("## {title}\n\n"));
    match content {
        Some(text) if !text.trim().is_empty() => {
            doc.push_str(text.trim_end());
            doc.push_str("\n\n");
        }
        _ => doc.push_str("_This section could not be generated._\n\n"),
    }
}

/// Documented source goes inside a fenced block unless the stage already
/// emitted fences of its own.
fn push_code_section(doc: &mut String, title: &str, language: Language, content: Option<&str>) {
    doc.push_str(&format!("## {title}\n\n"));
    match content {
        Some(text) if !text.trim().is_empty() => {
            let text = text.trim();
            if text.starts_with("```") {
                doc.push_str(text);
            } else {
                doc.push_str(&format!("```{language}\n{text}\n```"));
            }
            doc.push_str("\n\n");
        }
        _ => doc.push_str("_This section could not be generated._\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cda_domain::value_objects::{UnitChange, UnitKind};

    fn artifacts_with(kind: ArtifactKind, text: &str) -> DocumentationArtifactSet {
        let mut set = DocumentationArtifactSet::default();
        set.set(kind, text.to_string());
        set
    }

    #[test]
    fn test_assemble_includes_all_sections() {
        let mut set = DocumentationArtifactSet::default();
        set.set(ArtifactKind::Analysis, "analysis body".to_string());
        set.set(ArtifactKind::Markdown, "markdown body".to_string());
        set.set(ArtifactKind::Docstrings, "def f(): ...".to_string());
        set.set(ArtifactKind::Diagram, "graph TD".to_string());
        set.set(ArtifactKind::Validation, "all good".to_string());

        let doc = assemble_document("demo", Language::Python, &set, None);
        assert!(doc.starts_with("# demo - Documentation"));
        assert!(doc.contains("## Code Analysis"));
        assert!(doc.contains("analysis body"));
        assert!(doc.contains("```python\ndef f(): ...\n```"));
        assert!(doc.contains("## Validation Report"));
        assert!(!doc.contains("## Changes in This Revision"));
    }

    #[test]
    fn test_assemble_notes_missing_sections() {
        let set = artifacts_with(ArtifactKind::Analysis, "only analysis");
        let doc = assemble_document("demo", Language::Go, &set, None);
        assert!(doc.contains("only analysis"));
        assert!(doc.contains("_This section could not be generated._"));
    }

    #[test]
    fn test_assemble_renders_change_section_when_changed() {
        let set = artifacts_with(ArtifactKind::Analysis, "a");
        let report = ChangeReport::from_changes(
            vec![UnitChange {
                kind: UnitKind::Function,
                name: "added_fn".to_string(),
                signature: "def added_fn()".to_string(),
            }],
            Vec::new(),
            Vec::new(),
        );
        let doc = assemble_document("demo", Language::Python, &set, Some(&report));
        assert!(doc.contains("## Changes in This Revision"));
        assert!(doc.contains("added_fn"));
    }

    #[test]
    fn test_assemble_skips_change_section_for_baseline() {
        let set = artifacts_with(ArtifactKind::Analysis, "a");
        let report = ChangeReport::baseline();
        let doc = assemble_document("demo", Language::Python, &set, Some(&report));
        assert!(!doc.contains("## Changes in This Revision"));
    }

    #[test]
    fn test_assemble_keeps_existing_fences() {
        let set = artifacts_with(ArtifactKind::Docstrings, "```python\ncode\n```");
        let doc = assemble_document("demo", Language::Python, &set, None);
        assert!(!doc.contains("```python\n```python"));
    }
}
