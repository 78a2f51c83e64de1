//! Request handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::info;

use crate::archive::build_archive;
use crate::error::ApiResult;
use crate::models::{HealthResponse, ProjectListResponse, UploadRequest, UploadResponse};
use crate::state::AppState;

/// Submit a source file for documentation
pub async fn upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> ApiResult<impl IntoResponse> {
    info!(file_name = %request.file_name, bytes = request.content.len(), "upload received");
    let outcome = state
        .submission
        .submit(&request.file_name, &request.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            project: outcome.project,
            stages: outcome.stages,
            change: outcome.change,
        }),
    ))
}

/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let projects = state.projects.list().await?;
    let total = projects.len();
    Ok(Json(ProjectListResponse { projects, total }))
}

/// Full project record
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.projects.get(&id).await?))
}

/// The assembled documentation document as Markdown
pub async fn get_documentation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let body = state.projects.documentation(&id).await?;
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], body))
}

/// The structural analysis artifact as Markdown
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let body = state.projects.analysis(&id).await?;
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], body))
}

/// All artifacts packed into a tar.gz archive
pub async fn get_archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let project = state.projects.get(&id).await?;
    let entries = state.projects.archive_entries(&id).await?;
    let bytes = build_archive(&entries)?;

    let disposition = format!("attachment; filename=\"{}-documentation.tar.gz\"", project.name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/gzip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// Delete a project and everything stored for it
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.projects.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Service health and supported languages
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}
