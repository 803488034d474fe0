use crate::domain::errors::AuthError;
use crate::interface_adapters::protocol::{
    CredentialsRequest, ErrorBody, ErrorResponse, UserResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::sign_in::SignInUseCase;
use crate::use_cases::sign_up::SignUpUseCase;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, warn};

// Liveness greeting forwarded by the gateway's `GET /auth`.
pub async fn hello() -> &'static str {
    "Hello from auth service!"
}

// Handler for registering a new user.
#[tracing::instrument(name = "sign_up", skip_all)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = SignUpUseCase {
        clock: SystemClock,
        store: state.users.clone(),
        hasher: state.hasher.clone(),
    };

    let user = use_case
        .execute(payload)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::SignUp))?;

    info!(user_id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

// Handler for validating a user's credentials.
#[tracing::instrument(name = "sign_in", skip_all)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SignInUseCase {
        store: state.users.clone(),
        hasher: state.hasher.clone(),
    };

    let user = use_case
        .execute(payload)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::SignIn))?;

    Ok(Json(user.into()))
}

// Helper to build a JSON error response.
fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
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

// Maps domain errors to HTTP responses by endpoint context.
enum AuthErrorContext {
    SignUp,
    SignIn,
}

fn map_auth_error(
    err: AuthError,
    context: AuthErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match (context, err) {
        (_, AuthError::StorageFailure) => {
            warn!("user store unavailable");
            error_response(StatusCode::BAD_GATEWAY, "storage error")
        }
        (_, AuthError::HashFailure) => {
            warn!("password hash could not be processed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
        (AuthErrorContext::SignUp, AuthError::InvalidEmail) => {
            error_response(StatusCode::BAD_REQUEST, "invalid email")
        }
        (AuthErrorContext::SignUp, AuthError::WeakPassword) => error_response(
            StatusCode::BAD_REQUEST,
            "password must be at least 8 characters",
        ),
        (AuthErrorContext::SignUp, AuthError::EmailTaken(email)) => error_response(
            StatusCode::CONFLICT,
            format!("User with email {email} already exists"),
        ),
        (AuthErrorContext::SignIn, AuthError::UserNotFound(email)) => error_response(
            StatusCode::NOT_FOUND,
            format!("User with email {email} not found"),
        ),
        (AuthErrorContext::SignIn, AuthError::InvalidCredentials) => {
            error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
        }
        // Remaining combinations are not produced by the use case for that endpoint.
        (AuthErrorContext::SignUp, AuthError::UserNotFound(_) | AuthError::InvalidCredentials)
        | (
            AuthErrorContext::SignIn,
            AuthError::InvalidEmail | AuthError::WeakPassword | AuthError::EmailTaken(_),
        ) => error_response(StatusCode::BAD_REQUEST, "invalid request"),
    }
}
