use crate::domain::{Clock, GatewayError};
use crate::interface_adapters::state::SystemClock;
use crate::use_cases::normalize_error::normalize;
use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::any::Any;

// Terminal handler for every failed request: the error is classified once and
// written as a single `{statusCode, message, timestamp}` JSON response.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        respond(&self, &SystemClock)
    }
}

pub fn respond<C: Clock>(error: &GatewayError, clock: &C) -> Response {
    let body = normalize(error, clock);
    let status =
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!(kind = error.kind(), status = body.status_code, error = %error, "request failed");
    } else {
        tracing::warn!(kind = error.kind(), status = body.status_code, error = %error, "request failed");
    }

    (status, Json(body)).into_response()
}

// Response used by the panic-catching layer.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|detail| detail.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    tracing::error!(panic = %detail, "handler panicked");

    GatewayError::Unclassified.into_response()
}

pub async fn route_not_found(method: Method, uri: Uri) -> GatewayError {
    GatewayError::http(404, format!("Cannot {method} {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> GatewayError {
    GatewayError::http(405, format!("Cannot {method} {}", uri.path()))
}
