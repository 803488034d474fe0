use crate::domain::ports::ProjectStore;
use crate::interface_adapters::handlers::{ApiError, map_project_error};
use crate::interface_adapters::protocol::{
    CreateProjectRequest, ProjectResponse, UpdateProjectRequest,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::projects::ProjectUseCases;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

fn use_cases(state: &AppState) -> ProjectUseCases<SystemClock, Arc<dyn ProjectStore>> {
    ProjectUseCases {
        clock: SystemClock,
        store: state.projects.clone(),
    }
}

#[tracing::instrument(name = "list_projects", skip_all)]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = use_cases(&state).list().await.map_err(map_project_error)?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

#[tracing::instrument(name = "get_project", skip_all, fields(project_id = id))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = use_cases(&state).get(id).await.map_err(map_project_error)?;
    Ok(Json(project.into()))
}

#[tracing::instrument(name = "create_project", skip_all)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let project = use_cases(&state)
        .create(payload)
        .await
        .map_err(map_project_error)?;

    info!(project_id = project.id, "project created");
    Ok((StatusCode::CREATED, Json(project.into())))
}

#[tracing::instrument(name = "update_project", skip_all, fields(project_id = id))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = use_cases(&state)
        .update(id, payload)
        .await
        .map_err(map_project_error)?;
    Ok(Json(project.into()))
}

#[tracing::instrument(name = "delete_project", skip_all, fields(project_id = id))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    use_cases(&state)
        .delete(id)
        .await
        .map_err(map_project_error)?;

    info!("project deleted");
    Ok(StatusCode::NO_CONTENT)
}
