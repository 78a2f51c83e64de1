//! Heuristic code unit extraction strategies
//!
//! Extraction is signature-level pattern matching, not parsing: enough to
//! tell which top-level functions, classes, and methods exist in a file so
//! the change detector can diff two revisions structurally. Each supported
//! language family gets one strategy; anything unrecognized degrades to the
//! whole-file fallback inside the change detector.

use cda_domain::value_objects::{CodeUnit, Language, UnitKind};
use regex::Regex;

/// Strategy for extracting top-level code units from source text
///
/// Implementations must never fail: malformed or non-code input simply
/// yields an empty unit list.
pub trait UnitExtractor: Send + Sync {
    /// Extract units in order of appearance
    fn extract(&self, source: &str) -> Vec<CodeUnit>;
}

/// Pick the extraction strategy for a language tag
pub fn extractor_for(language: Language) -> Box<dyn UnitExtractor> {
    match language {
        Language::Python => Box::new(PythonUnitExtractor::new()),
        _ => Box::new(BraceUnitExtractor::new(language)),
    }
}

/// Start line of a detected unit, before body spans are assigned
struct UnitStart {
    line: usize,
    kind: UnitKind,
    name: String,
    signature: String,
}

/// Assign each unit a body running to the start of the next unit
fn spans_to_units(lines: &[&str], starts: Vec<UnitStart>) -> Vec<CodeUnit> {
    let mut units = Vec::with_capacity(starts.len());
    for (i, start) in starts.iter().enumerate() {
        let end = starts
            .get(i + 1)
            .map(|next| next.line)
            .unwrap_or(lines.len());
        let body = lines[start.line..end].join("\n").trim_end().to_string();
        units.push(CodeUnit::new(
            start.kind,
            start.name.clone(),
            start.signature.clone(),
            body,
        ));
    }
    units
}

/// Indentation-based extractor for Python
///
/// Tracks the enclosing class by indentation so methods are reported as
/// `Class.method`, matching how they are named in change summaries.
pub struct PythonUnitExtractor {
    class_re: Regex,
    def_re: Regex,
}

impl PythonUnitExtractor {
    /// Create the extractor with its compiled patterns
    pub fn new() -> Self {
        Self {
            // Signature up to the colon; parameters may span into the capture
            class_re: Regex::new(r"^(\s*)class\s+(\w+)(\([^)]*\))?\s*:").expect("valid regex"),
            def_re: Regex::new(r"^(\s*)(?:async\s+)?def\s+(\w+)\s*\(([^)]*)\)").expect("valid regex"),
        }
    }
}

impl Default for PythonUnitExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitExtractor for PythonUnitExtractor {
    fn extract(&self, source: &str) -> Vec<CodeUnit> {
        let lines: Vec<&str> = source.lines().collect();
        let mut starts = Vec::new();
        let mut current_class: Option<(String, usize)> = None;

        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = self.class_re.captures(line) {
                let indent = caps.get(1).map_or(0, |m| m.as_str().len());
                let name = caps[2].to_string();
                if indent == 0 {
                    current_class = Some((name.clone(), indent));
                    starts.push(UnitStart {
                        line: i,
                        kind: UnitKind::Class,
                        name,
                        signature: line.trim().trim_end_matches(':').to_string(),
                    });
                }
                continue;
            }

            if let Some(caps) = self.def_re.captures(line) {
                let indent = caps.get(1).map_or(0, |m| m.as_str().len());
                let name = caps[2].to_string();
                if indent == 0 {
                    current_class = None;
                    starts.push(UnitStart {
                        line: i,
                        kind: UnitKind::Function,
                        name,
                        signature: line.trim().trim_end_matches(':').to_string(),
                    });
                } else if let Some((class_name, class_indent)) = &current_class {
                    if indent > *class_indent {
                        starts.push(UnitStart {
                            line: i,
                            kind: UnitKind::Method,
                            name: format!("{class_name}.{name}"),
                            signature: line.trim().trim_end_matches(':').to_string(),
                        });
                    }
                }
                continue;
            }

            // A non-blank line at column zero ends the enclosing class
            if !line.trim().is_empty() && !line.starts_with([' ', '\t']) {
                current_class = None;
            }
        }

        spans_to_units(&lines, starts)
    }
}

/// Keyword-based extractor for brace languages
///
/// Covers the JavaScript/TypeScript function forms, Java/C# method
/// signatures, Go/Rust function keywords, and `class`/`struct`/`interface`
/// declarations. Patterns are chosen per language so e.g. Rust sources are
/// not scanned for `function` expressions.
pub struct BraceUnitExtractor {
    function_patterns: Vec<Regex>,
    class_patterns: Vec<Regex>,
}

/// Control-flow keywords that the Java/C# method pattern must not match
const METHOD_KEYWORD_BLOCKLIST: &[&str] = &["if", "for", "while", "switch", "catch", "return"];

impl BraceUnitExtractor {
    /// Create the extractor for one language
    pub fn new(language: Language) -> Self {
        let function_patterns = match language {
            Language::Go => vec![r"^\s*func\s+(?:\([^)]*\)\s*)?(\w+)\s*\("],
            Language::Rust => vec![r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?fn\s+(\w+)"],
            Language::Java | Language::CSharp | Language::Cpp | Language::C => {
                vec![r"^\s*(?:(?:public|private|protected|static|final|virtual|override|inline)\s+)*[\w<>\[\],:&*]+\s+(\w+)\s*\([^)]*\)\s*\{?\s*$"]
            }
            _ => vec![
                r"^\s*(?:export\s+)?(?:async\s+)?function\s+(\w+)",
                r"^\s*(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?(?:function\b|\()",
            ],
        };
        let class_patterns = match language {
            Language::Rust => vec![r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:struct|enum|trait)\s+(\w+)"],
            Language::Go => vec![r"^\s*type\s+(\w+)\s+(?:struct|interface)\b"],
            _ => vec![r"^\s*(?:export\s+)?(?:public\s+|abstract\s+)*(?:class|interface|struct)\s+(\w+)"],
        };

        Self {
            function_patterns: function_patterns
                .into_iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect(),
            class_patterns: class_patterns
                .into_iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect(),
        }
    }

    fn first_capture(caps: &regex::Captures<'_>) -> Option<String> {
        caps.iter()
            .skip(1)
            .flatten()
            .next()
            .map(|m| m.as_str().to_string())
    }
}

impl UnitExtractor for BraceUnitExtractor {
    fn extract(&self, source: &str) -> Vec<CodeUnit> {
        let lines: Vec<&str> = source.lines().collect();
        let mut starts = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let mut matched = false;
            for re in &self.class_patterns {
                if let Some(caps) = re.captures(line) {
                    if let Some(name) = Self::first_capture(&caps) {
                        starts.push(UnitStart {
                            line: i,
                            kind: UnitKind::Class,
                            name,
                            signature: line.trim().trim_end_matches('{').trim().to_string(),
                        });
                        matched = true;
                        break;
                    }
                }
            }
            if matched {
                continue;
            }

            for re in &self.function_patterns {
                if let Some(caps) = re.captures(line) {
                    if let Some(name) = Self::first_capture(&caps) {
                        if METHOD_KEYWORD_BLOCKLIST.contains(&name.as_str()) {
                            continue;
                        }
                        starts.push(UnitStart {
                            line: i,
                            kind: UnitKind::Function,
                            name,
                            signature: line.trim().trim_end_matches('{').trim().to_string(),
                        });
                        break;
                    }
                }
            }
        }

        spans_to_units(&lines, starts)
    }
}
