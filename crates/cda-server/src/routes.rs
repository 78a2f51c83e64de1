//! API routes

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use crate::handlers::{
    delete_project, get_analysis, get_archive, get_documentation, get_project, health_check,
    list_projects, upload,
};
use crate::state::AppState;

/// Create the API router
///
/// `max_upload_bytes` caps request body size; oversized uploads are
/// rejected with 413 before reaching a handler.
///
/// Routes:
/// - POST /projects/upload - submit a source file
/// - GET /projects - list projects
/// - GET /projects/{id} - full project record
/// - GET /projects/{id}/documentation - assembled Markdown document
/// - GET /projects/{id}/analysis - structural analysis artifact
/// - GET /projects/{id}/archive - artifacts as tar.gz
/// - DELETE /projects/{id} - delete a project
/// - GET /health - health check
pub fn api_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/projects/upload", post(upload))
        .route("/projects", get(list_projects))
        .route("/projects/{id}", get(get_project).delete(delete_project))
        .route("/projects/{id}/documentation", get(get_documentation))
        .route("/projects/{id}/analysis", get(get_analysis))
        .route("/projects/{id}/archive", get(get_archive))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
