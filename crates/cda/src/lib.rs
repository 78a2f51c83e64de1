//! # Code Documentation Agent
//!
//! A web service that turns uploaded source files into a complete
//! documentation set using a fixed five-stage LLM pipeline, with textual
//! change detection between revisions of the same file.
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture:
//!
//! - `domain` - entities, value objects, and the error taxonomy
//! - `cda-application` - ports, the pipeline, and the use cases
//! - `infrastructure` - config, logging, and filesystem storage
//! - `cda-providers` - generation backends (OpenAI, null)
//! - `server` - REST API and bootstrap

/// Domain layer - core business logic and types
pub mod domain {
    pub use cda_domain::*;
}

/// Infrastructure layer - config, logging, and storage
pub mod infrastructure {
    pub use cda_infrastructure::*;
}

/// Server layer - REST API and bootstrap
pub mod server {
    pub use cda_server::*;
}

pub use domain::*;
pub use server::run;
