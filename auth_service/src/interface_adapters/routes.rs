use crate::interface_adapters::handlers::{hello, sign_in, sign_up};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth", get(hello))
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailureFlags, PlainHasher, RecordingStore};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_test_app(store: RecordingStore) -> Router {
        let state = AppState {
            users: Arc::new(store),
            hasher: Arc::new(PlainHasher),
        };

        app(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("expected request to build")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    #[tokio::test]
    async fn when_hello_is_requested_then_returns_greeting() {
        let app = build_test_app(RecordingStore::new());

        let request = Request::builder()
            .method("GET")
            .uri("/auth")
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        assert_eq!(&body[..], b"Hello from auth service!");
    }

    #[tokio::test]
    async fn when_sign_up_payload_is_valid_then_returns_201_without_password_hash() {
        let store = RecordingStore::new();
        let app = build_test_app(store.clone());

        let response = app
            .oneshot(post_json(
                "/auth/sign-up",
                r#"{"email":"pilot@example.com","password":"hunter2222"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = body_json(response).await;
        assert_eq!(payload["email"], "pilot@example.com");
        assert!(payload["id"].is_i64());
        assert!(payload.get("password_hash").is_none());
        assert!(store.get_test_user("pilot@example.com").is_some());
    }

    #[tokio::test]
    async fn when_sign_up_email_is_taken_then_returns_409_rpc_envelope() {
        let store = RecordingStore::new();
        store.insert_test_user("pilot@example.com", "plain:hunter2222");
        let app = build_test_app(store);

        let response = app
            .oneshot(post_json(
                "/auth/sign-up",
                r#"{"email":"pilot@example.com","password":"hunter2222"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let payload = body_json(response).await;
        assert_eq!(payload["error"]["statusCode"], 409);
        assert_eq!(
            payload["error"]["message"],
            "User with email pilot@example.com already exists"
        );
    }

    #[tokio::test]
    async fn when_sign_up_email_is_invalid_then_returns_400() {
        let app = build_test_app(RecordingStore::new());

        let response = app
            .oneshot(post_json(
                "/auth/sign-up",
                r#"{"email":"pilot","password":"hunter2222"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = body_json(response).await;
        assert_eq!(payload["error"]["message"], "invalid email");
    }

    #[tokio::test]
    async fn when_sign_up_password_is_short_then_returns_400() {
        let app = build_test_app(RecordingStore::new());

        let response = app
            .oneshot(post_json(
                "/auth/sign-up",
                r#"{"email":"pilot@example.com","password":"short"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = body_json(response).await;
        assert_eq!(
            payload["error"]["message"],
            "password must be at least 8 characters"
        );
    }

    #[tokio::test]
    async fn when_sign_in_email_is_unknown_then_returns_404_rpc_envelope() {
        let app = build_test_app(RecordingStore::new());

        let response = app
            .oneshot(post_json(
                "/auth/sign-in",
                r#"{"email":"ghost@example.com","password":"hunter2222"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = body_json(response).await;
        assert_eq!(payload["error"]["statusCode"], 404);
        assert_eq!(
            payload["error"]["message"],
            "User with email ghost@example.com not found"
        );
    }

    #[tokio::test]
    async fn when_sign_in_password_is_wrong_then_returns_401() {
        let store = RecordingStore::new();
        store.insert_test_user("pilot@example.com", "plain:hunter2222");
        let app = build_test_app(store);

        let response = app
            .oneshot(post_json(
                "/auth/sign-in",
                r#"{"email":"pilot@example.com","password":"not-it-at-all"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = body_json(response).await;
        assert_eq!(payload["error"]["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn when_sign_in_credentials_match_then_returns_200_with_user() {
        let store = RecordingStore::new();
        let stored = store.insert_test_user("pilot@example.com", "plain:hunter2222");
        let app = build_test_app(store);

        let response = app
            .oneshot(post_json(
                "/auth/sign-in",
                r#"{"email":"pilot@example.com","password":"hunter2222"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload["id"], stored.id);
        assert_eq!(payload["email"], "pilot@example.com");
    }

    #[tokio::test]
    async fn when_store_is_down_then_returns_502() {
        let store = RecordingStore::new().with_failures(FailureFlags {
            find: true,
            ..Default::default()
        });
        let app = build_test_app(store);

        let response = app
            .oneshot(post_json(
                "/auth/sign-in",
                r#"{"email":"pilot@example.com","password":"hunter2222"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let payload = body_json(response).await;
        assert_eq!(payload["error"]["message"], "storage error");
    }

    #[tokio::test]
    async fn when_sign_in_payload_is_missing_fields_then_returns_422() {
        let app = build_test_app(RecordingStore::new());

        let response = app
            .oneshot(post_json("/auth/sign-in", r#"{}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn when_sign_up_is_called_with_get_then_returns_405() {
        let app = build_test_app(RecordingStore::new());

        let request = Request::builder()
            .method("GET")
            .uri("/auth/sign-up")
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
