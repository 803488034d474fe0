use crate::domain::{GatewayError, Project};
use crate::interface_adapters::extract::{JsonBody, PathParam};
use crate::interface_adapters::protocol::{CreateProjectRequest, UpdateProjectRequest, Validate};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "list_projects", skip_all)]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Project>>, GatewayError> {
    let projects = state.projects.list_projects().await?;
    Ok(Json(projects))
}

#[tracing::instrument(name = "get_project", skip_all, fields(project_id = id))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Project>, GatewayError> {
    let project = state.projects.get_project(id).await?;
    Ok(Json(project))
}

#[tracing::instrument(name = "create_project", skip_all)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), GatewayError> {
    body.validate()?;

    let project = state.projects.create_project(body.into()).await?;

    tracing::info!(project_id = project.id, "project created.");
    Ok((StatusCode::CREATED, Json(project)))
}

#[tracing::instrument(name = "update_project", skip_all, fields(project_id = id))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateProjectRequest>,
) -> Result<Json<Project>, GatewayError> {
    body.validate()?;

    let project = state.projects.update_project(id, body.into()).await?;
    Ok(Json(project))
}

#[tracing::instrument(name = "delete_project", skip_all, fields(project_id = id))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, GatewayError> {
    state.projects.delete_project(id).await?;

    tracing::info!("project deleted.");
    Ok(StatusCode::NO_CONTENT)
}
