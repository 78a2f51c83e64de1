//! Application Layer - Code Documentation Agent
//!
//! Use cases and orchestration for the documentation pipeline, following
//! Clean Architecture: this crate defines the ports (provider and
//! infrastructure interfaces) that outer layers implement, and contains all
//! control flow between them.
//!
//! ## Pipeline
//!
//! The fixed workflow graph executed per submission:
//!
//! ```text
//! Parse -> Docstring -> {Markdown, Diagram} -> Validate
//! ```
//!
//! Markdown and Diagram run concurrently once Docstring completes. Validate
//! waits for both and runs regardless of their individual outcomes. If Parse
//! fails, every downstream stage is skipped and the submission is Failed.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cda-domain`: entities, value objects, and the error taxonomy
//! - Pure Rust libraries for async, serialization, and text heuristics

pub mod domain_services;
pub mod pipeline;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use pipeline::*;
pub use ports::*;
pub use use_cases::*;
