use crate::domain::ports::{ProjectStore, TaskStore};
use crate::interface_adapters::handlers::{ApiError, map_project_error};
use crate::interface_adapters::protocol::{
    CreateTaskRequest, TaskListQuery, TaskResponse, UpdateTaskRequest,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::tasks::TaskUseCases;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

type Tasks = TaskUseCases<SystemClock, Arc<dyn ProjectStore>, Arc<dyn TaskStore>>;

fn use_cases(state: &AppState) -> Tasks {
    TaskUseCases {
        clock: SystemClock,
        projects: state.projects.clone(),
        tasks: state.tasks.clone(),
    }
}

#[tracing::instrument(name = "list_tasks", skip_all, fields(project_id = ?query.project_id))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = use_cases(&state)
        .list(query.project_id)
        .await
        .map_err(map_project_error)?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

#[tracing::instrument(name = "get_task", skip_all, fields(task_id = id))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = use_cases(&state).get(id).await.map_err(map_project_error)?;
    Ok(Json(task.into()))
}

#[tracing::instrument(name = "create_task", skip_all, fields(project_id = payload.project_id))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let task = use_cases(&state)
        .create(payload)
        .await
        .map_err(map_project_error)?;

    info!(task_id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task.into())))
}

#[tracing::instrument(name = "update_task", skip_all, fields(task_id = id))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = use_cases(&state)
        .update(id, payload)
        .await
        .map_err(map_project_error)?;
    Ok(Json(task.into()))
}

#[tracing::instrument(name = "delete_task", skip_all, fields(task_id = id))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    use_cases(&state)
        .delete(id)
        .await
        .map_err(map_project_error)?;

    info!("task deleted");
    Ok(StatusCode::NO_CONTENT)
}
