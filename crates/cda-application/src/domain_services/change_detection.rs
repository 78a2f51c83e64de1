//! Change detection between source snapshots
//!
//! Structural comparison at the granularity of top-level code units. Units
//! are matched across revisions by kind and name; duplicate names pair by
//! order of appearance. The detector never fails: when no units can be
//! extracted from either revision, a content difference degrades to a
//! single whole-file modification.

use cda_domain::entities::SourceSnapshot;
use cda_domain::value_objects::{ChangeReport, CodeUnit, Language, UnitChange, UnitKind};
use tracing::debug;

use crate::domain_services::extraction::extractor_for;

/// Detects structural changes between two revisions of the same file
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeDetector;

impl ChangeDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }

    /// Compare the current snapshot against the previous one, if any
    ///
    /// A first submission (no previous snapshot) is a baseline, not a
    /// change: `changed = false` with empty lists.
    pub fn detect(
        &self,
        previous: Option<&SourceSnapshot>,
        current: &SourceSnapshot,
        language: Language,
    ) -> ChangeReport {
        let Some(previous) = previous else {
            return ChangeReport::baseline();
        };
        self.compare(&previous.content, &current.content, language)
    }

    /// Compare two versions of source text
    pub fn compare(&self, old_code: &str, new_code: &str, language: Language) -> ChangeReport {
        if old_code == new_code {
            return ChangeReport::from_changes(Vec::new(), Vec::new(), Vec::new());
        }

        let extractor = extractor_for(language);
        let old_units = extractor.extract(old_code);
        let new_units = extractor.extract(new_code);
        debug!(
            old_units = old_units.len(),
            new_units = new_units.len(),
            language = %language,
            "comparing snapshots"
        );

        // Degraded mode: no structure found on either side, but the text
        // differs, so report the whole file as one modified unit.
        if old_units.is_empty() && new_units.is_empty() {
            let whole_file = UnitChange {
                kind: UnitKind::Other,
                name: "file".to_string(),
                signature: "entire file".to_string(),
            };
            return ChangeReport::from_changes(Vec::new(), Vec::new(), vec![whole_file]);
        }

        Self::diff_units(&old_units, &new_units)
    }

    /// Pair units across revisions and classify the leftovers
    fn diff_units(old_units: &[CodeUnit], new_units: &[CodeUnit]) -> ChangeReport {
        let mut old_matched = vec![false; old_units.len()];
        let mut added = Vec::new();
        let mut modified = Vec::new();

        for new_unit in new_units {
            // First unmatched previous unit with the same kind and name
            let pair = old_units
                .iter()
                .enumerate()
                .find(|(i, old)| !old_matched[*i] && old.key() == new_unit.key());

            match pair {
                Some((i, old_unit)) => {
                    old_matched[i] = true;
                    if Self::unit_differs(old_unit, new_unit) {
                        modified.push(UnitChange::from_unit(new_unit));
                    }
                }
                None => added.push(UnitChange::from_unit(new_unit)),
            }
        }

        let removed = old_units
            .iter()
            .zip(old_matched.iter())
            .filter(|(_, matched)| !**matched)
            .map(|(unit, _)| UnitChange::from_unit(unit))
            .collect();

        ChangeReport::from_changes(added, removed, modified)
    }

    fn unit_differs(old: &CodeUnit, new: &CodeUnit) -> bool {
        normalize_signature(&old.signature) != normalize_signature(&new.signature)
            || normalize_body(&old.body) != normalize_body(&new.body)
    }
}

/// Collapse whitespace so formatting-only edits do not count as changes
fn normalize_signature(sig: &str) -> String {
    sig.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" (", "(")
        .replace("( ", "(")
        .replace(" )", ")")
        .replace(" ,", ",")
        .replace(", ", ",")
        .replace(" :", ":")
        .replace(": ", ":")
}

/// Strip all whitespace so indentation and blank-line edits are invisible
fn normalize_body(body: &str) -> String {
    body.split_whitespace().collect()
}
