//! HTTP Server - Code Documentation Agent
//!
//! REST API over the application use cases plus the bootstrap wiring that
//! assembles storage, providers, and the pipeline into a running service.
//!
//! ## Endpoints
//!
//! - `POST /projects/upload` - submit a source file for documentation
//! - `GET /projects` - list projects
//! - `GET /projects/{id}` - full project record
//! - `GET /projects/{id}/documentation` - assembled Markdown document
//! - `GET /projects/{id}/analysis` - structural analysis artifact
//! - `GET /projects/{id}/archive` - all artifacts as a tar.gz archive
//! - `DELETE /projects/{id}` - delete a project and its data
//! - `GET /health` - service health and supported languages

pub mod archive;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub use bootstrap::run;
pub use routes::api_router;
pub use state::AppState;
