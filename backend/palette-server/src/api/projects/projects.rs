//! Project REST API handlers

use crate::{ApiResult, AppState, CreateProjectRequest, CreatedResponse, JsonBody};

use palette_core::Project;
use palette_db::ProjectRepository;

use axum::{Json, extract::State, http::StatusCode};
use log::{debug, info};

/// GET /api/v1/projects
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    debug!("Listing {} projects", projects.len());

    Ok(Json(projects))
}

/// POST /api/v1/projects
///
/// Create a project; responds 201 with the new id
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    // Validate before touching the store
    let project = req.into_new_project()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let id = repo.create(&project).await?;

    info!("Created project {} ({})", id, project.project_name);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
