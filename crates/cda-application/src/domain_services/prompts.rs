//! Prompt rendering for pipeline stages
//!
//! Each stage's provider call is a rendered system/user prompt pair. The
//! context carries the source code plus the finalized outputs of upstream
//! stages; rendering is pure and side-effect free so it can be tested
//! without a provider.

use cda_domain::constants::{DIAGRAM_CONTEXT_MAX_CHARS, VALIDATION_CONTEXT_MAX_CHARS};
use cda_domain::value_objects::{Language, StageKind};

use crate::ports::providers::GenerationRequest;

/// Read-only context a stage receives when it is dispatched
///
/// Upstream slots are filled by the orchestrator as stages complete; a
/// stage never observes a partially written upstream output.
#[derive(Debug, Clone)]
pub struct StageContext {
    /// Project name, used in document headers
    pub project_name: String,
    /// Detected source language
    pub language: Language,
    /// Full source text of the current snapshot
    pub code: String,
    /// Rendered change summary when this submission is an update
    pub change_context: Option<String>,
    /// Parse stage output
    pub analysis: Option<String>,
    /// Docstring stage output
    pub docstrings: Option<String>,
    /// Markdown stage output
    pub markdown: Option<String>,
    /// Diagram stage output
    pub diagram: Option<String>,
}

impl StageContext {
    /// Context for the start of a pipeline run, before any stage output
    pub fn new(
        project_name: impl Into<String>,
        language: Language,
        code: impl Into<String>,
        change_context: Option<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            language,
            code: code.into(),
            change_context,
            analysis: None,
            docstrings: None,
            markdown: None,
            diagram: None,
        }
    }
}

/// Render the prompt pair for one stage
pub fn render(stage: StageKind, ctx: &StageContext) -> GenerationRequest {
    match stage {
        StageKind::Parse => render_parse(ctx),
        StageKind::Docstring => render_docstring(ctx),
        StageKind::Markdown => render_markdown(ctx),
        StageKind::Diagram => render_diagram(ctx),
        StageKind::Validate => render_validate(ctx),
    }
}

fn code_message(ctx: &StageContext) -> String {
    format!(
        "**Language:** {lang}\n\n**Code:**\n```{lang}\n{code}\n```",
        lang = ctx.language,
        code = ctx.code
    )
}

fn change_block(ctx: &StageContext) -> String {
    match &ctx.change_context {
        Some(changes) => format!(
            "\n**CODE UPDATE - focus on changed items:**\n{changes}\n\
             Update documentation for modified items, add documentation for \
             new items, remove documentation for deleted items.\n"
        ),
        None => String::new(),
    }
}

fn render_parse(ctx: &StageContext) -> GenerationRequest {
    let system = format!(
        "You are an expert code analyzer for {lang}. Perform deep structural analysis.\n\
         {changes}\n\
         Extract ALL code components:\n\n\
         ## Code Structure Overview\n\
         [Architecture, design patterns, organization]\n\n\
         ## Imports and Dependencies\n\
         External dependencies and internal modules with their purpose.\n\n\
         ## Functions\n\
         For EACH function: signature, purpose, parameters with types, return \
         value, exceptions raised, complexity, and a short usage example.\n\n\
         ## Classes\n\
         For EACH class: purpose, inheritance, attributes, methods, design \
         patterns, and a short usage example.\n\n\
         ## Module Relationships\n\
         How components depend on each other and how data flows between them.\n\n\
         Be exhaustive - extract EVERYTHING.",
        lang = ctx.language,
        changes = change_block(ctx)
    );
    GenerationRequest::new(system, code_message(ctx))
}

fn render_docstring(ctx: &StageContext) -> GenerationRequest {
    let style = ctx.language.doc_style();
    let system = format!(
        "You are a docstring expert for {lang}. Generate COMPLETE, CONSISTENT \
         docstrings using {style}.\n\
         {changes}\n\
         Requirements:\n\
         1. Add docstrings to ALL functions and classes\n\
         2. Follow {style} format exactly\n\
         3. Include: a one-line summary, a detailed explanation, ALL parameters \
         with types and descriptions, the return value, raised exceptions, and \
         notes about complexity or edge cases\n\n\
         Output the COMPLETE source code with integrated docstrings.",
        lang = ctx.language,
        style = style,
        changes = change_block(ctx)
    );
    GenerationRequest::new(
        system,
        format!(
            "{}\n\n**Generate complete code with all docstrings integrated.**",
            code_message(ctx)
        ),
    )
}

fn render_markdown(ctx: &StageContext) -> GenerationRequest {
    let system = format!(
        "You are a technical writer. Create professional Markdown API \
         documentation for {lang} code.\n\
         {changes}\n\
         Structure: project overview, installation, quick start, an API \
         reference covering every function and class (description, parameters, \
         returns, raises, examples), architecture notes, error handling, and \
         troubleshooting. Make it comprehensive, professional, and ready for \
         production use.",
        lang = ctx.language,
        changes = change_block(ctx)
    );
    GenerationRequest::new(system, code_message(ctx))
}

fn render_diagram(ctx: &StageContext) -> GenerationRequest {
    let system = "You are a diagram expert. Create Mermaid diagrams for code \
         architecture: a `graph TD` module/architecture diagram, a \
         `classDiagram` class hierarchy, and a `sequenceDiagram` where \
         applicable. Attributes and methods MUST be inside class blocks using \
         curly braces. Use actual names from the analyzed code and keep the \
         diagrams clear and informative."
        .to_string();
    let analysis = truncate(
        ctx.analysis.as_deref().unwrap_or("(no analysis available)"),
        DIAGRAM_CONTEXT_MAX_CHARS,
    );
    GenerationRequest::new(
        system,
        format!(
            "**Language:** {}\n\n**Code Analysis:**\n{}",
            ctx.language, analysis
        ),
    )
}

fn render_validate(ctx: &StageContext) -> GenerationRequest {
    let system = "You are a documentation quality validator. Check the \
         generated documentation for completeness (every public function, \
         class, and method documented), consistency (parameter names and \
         return types match between code and docs, uniform terminology), and \
         quality issues (incomplete parameter descriptions, missing examples, \
         vague descriptions, missing exception documentation). Report coverage \
         metrics and concrete recommendations. If an input below is marked as \
         missing, record that as a validation finding rather than failing."
        .to_string();

    let docstrings = match &ctx.docstrings {
        Some(text) => truncate(text, VALIDATION_CONTEXT_MAX_CHARS),
        None => "(docstring stage produced no output)".to_string(),
    };
    let markdown = match &ctx.markdown {
        Some(text) => truncate(text, VALIDATION_CONTEXT_MAX_CHARS),
        None => "(markdown stage produced no output)".to_string(),
    };
    let diagram = match &ctx.diagram {
        Some(text) => truncate(text, VALIDATION_CONTEXT_MAX_CHARS),
        None => "(diagram stage produced no output)".to_string(),
    };

    GenerationRequest::new(
        system,
        format!(
            "**Documented Code:**\n{docstrings}\n\n**Markdown:**\n{markdown}\n\n**Diagrams:**\n{diagram}"
        ),
    )
}

/// Truncate on a character boundary, keeping at most `max_chars` characters
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
