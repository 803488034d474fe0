use crate::domain::{GatewayError, Task};
use crate::interface_adapters::extract::{JsonBody, PathParam, QueryParams};
use crate::interface_adapters::protocol::{
    CreateTaskRequest, TaskListQuery, UpdateTaskRequest, Validate,
};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "list_tasks", skip_all, fields(project_id = ?query.project_id))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<TaskListQuery>,
) -> Result<Json<Vec<Task>>, GatewayError> {
    let tasks = state.tasks.list_tasks(query.project_id).await?;
    Ok(Json(tasks))
}

// Tasks of a single project; a missing project is reported by the service.
#[tracing::instrument(name = "list_project_tasks", skip_all, fields(project_id = id))]
pub async fn list_for_project(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Vec<Task>>, GatewayError> {
    state.projects.get_project(id).await?;
    let tasks = state.tasks.list_tasks(Some(id)).await?;
    Ok(Json(tasks))
}

#[tracing::instrument(name = "get_task", skip_all, fields(task_id = id))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Task>, GatewayError> {
    let task = state.tasks.get_task(id).await?;
    Ok(Json(task))
}

#[tracing::instrument(name = "create_task", skip_all, fields(project_id = body.project_id))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), GatewayError> {
    body.validate()?;

    let task = state.tasks.create_task(body.into()).await?;

    tracing::info!(task_id = task.id, "task created.");
    Ok((StatusCode::CREATED, Json(task)))
}

#[tracing::instrument(name = "update_task", skip_all, fields(task_id = id))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateTaskRequest>,
) -> Result<Json<Task>, GatewayError> {
    body.validate()?;

    let task = state.tasks.update_task(id, body.into()).await?;
    Ok(Json(task))
}

#[tracing::instrument(name = "delete_task", skip_all, fields(task_id = id))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, GatewayError> {
    state.tasks.delete_task(id).await?;

    tracing::info!("task deleted.");
    Ok(StatusCode::NO_CONTENT)
}
