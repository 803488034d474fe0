pub mod projects;
pub mod tasks;

use crate::domain::errors::ProjectError;
use crate::interface_adapters::protocol::{ErrorBody, ErrorResponse};
use axum::{Json, http::StatusCode};
use tracing::warn;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody {
                status_code: status.as_u16(),
                message: message.into(),
            },
        }),
    )
}

pub(crate) fn map_project_error(err: ProjectError) -> ApiError {
    match err {
        ProjectError::InvalidName => error_response(
            StatusCode::BAD_REQUEST,
            "name must be between 1 and 120 characters",
        ),
        ProjectError::InvalidTitle => error_response(
            StatusCode::BAD_REQUEST,
            "title must be between 1 and 200 characters",
        ),
        ProjectError::ProjectNotFound(id) => error_response(
            StatusCode::NOT_FOUND,
            format!("Project with id {id} not found"),
        ),
        ProjectError::TaskNotFound(id) => {
            error_response(StatusCode::NOT_FOUND, format!("Task with id {id} not found"))
        }
        ProjectError::StorageFailure => {
            warn!("project store unavailable");
            error_response(StatusCode::BAD_GATEWAY, "storage error")
        }
    }
}
