// Shared bootstrapping for gateway integration tests: one stub upstream that
// answers with every error shape the services produce, and one gateway
// pointed at it for both auth and projects.
use api_gateway::GatewayConfig;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::json;
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

static GATEWAY_URL: OnceLock<String> = OnceLock::new();
static GATEWAY_READY: OnceLock<()> = OnceLock::new();

// Upstream that mimics the services' error envelopes.
fn stub_upstream() -> Router {
    Router::new()
        .route("/auth", get(|| async { "Hello from auth service!" }))
        .route(
            "/auth/sign-in",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": { "statusCode": 401, "message": "Invalid credentials" } })),
                )
            }),
        )
        .route(
            "/auth/sign-up",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "not found" })),
                )
            }),
        )
        .route(
            "/projects",
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "message": { "statusCode": 503, "message": "maintenance" } })),
                )
            }),
        )
        .route(
            "/projects/{id}",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "statusCode": 400, "message": "bad input" })),
                )
            }),
        )
        .route(
            "/tasks",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/tasks/{id}", get(|| async { "definitely not a task" }))
}

// Ensure the stub and the gateway are running and return the gateway base URL.
pub fn ensure_gateway() -> &'static str {
    GATEWAY_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the servers outlive individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let upstream = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub upstream port");
                let upstream_url = format!("http://{}", upstream.local_addr().expect("upstream addr"));
                tokio::spawn(async move {
                    axum::serve(upstream, stub_upstream())
                        .await
                        .expect("stub upstream failed");
                });

                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral gateway port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));

                api_gateway::run(listener, test_config(&upstream_url, &upstream_url))
                    .await
                    .expect("gateway failed");
            });
        });
        wait_for_url_and_readiness(published_url);
    });

    GATEWAY_URL
        .get()
        .expect("gateway url should be initialized")
        .as_str()
}

pub fn test_config(auth_url: &str, projects_url: &str) -> GatewayConfig {
    GatewayConfig {
        port: 0,
        auth_service_url: auth_url.to_string(),
        projects_service_url: projects_url.to_string(),
        upstream_timeout: Duration::from_secs(2),
    }
}

fn wait_for_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = GATEWAY_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("gateway did not become ready in time");
}
