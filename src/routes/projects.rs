/**
 * Project Routes
 * Read-only endpoints over the project catalog
 */
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{catalog::models::Project, error::AppError, state::AppState};

/// Response for GET /api/projects
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// GET /api/projects - All projects in catalog order
pub async fn list_projects(State(state): State<AppState>) -> Json<ProjectListResponse> {
    Json(ProjectListResponse {
        projects: state.catalog.list_projects().to_vec(),
    })
}

/// GET /api/projects/{id} - A single project
///
/// Unknown ids answer 404 with `{"error": "Project not found"}`; ids that
/// are not integers answer 422.
pub async fn get_project(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Project>, AppError> {
    let Path(id) = id?;

    match state.catalog.get_project(id) {
        Ok(project) => Ok(Json(project.clone())),
        Err(e) => {
            tracing::debug!(project_id = id, "project lookup missed");
            Err(e.into())
        }
    }
}
