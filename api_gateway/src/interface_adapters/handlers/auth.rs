use crate::domain::{GatewayError, UserProfile};
use crate::interface_adapters::extract::JsonBody;
use crate::interface_adapters::protocol::{CredentialsRequest, Validate};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

#[tracing::instrument(name = "auth_hello", skip_all)]
pub async fn hello(State(state): State<Arc<AppState>>) -> Result<String, GatewayError> {
    state.auth.hello().await
}

#[tracing::instrument(name = "sign_up", skip_all)]
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserProfile>), GatewayError> {
    body.validate()?;

    // Forward the credentials; auth owns hashing and uniqueness checks.
    let user = state.auth.sign_up(body.into()).await?;

    tracing::info!(user_id = user.id, "user registered.");
    Ok((StatusCode::CREATED, Json(user)))
}

#[tracing::instrument(name = "sign_in", skip_all)]
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<Json<UserProfile>, GatewayError> {
    body.validate()?;

    let user = state.auth.sign_in(body.into()).await?;

    tracing::info!(user_id = user.id, "credentials accepted.");
    Ok(Json(user))
}
