mod support;

use chrono::DateTime;
use serde_json::{Value, json};

async fn envelope(response: reqwest::Response) -> Value {
    response.json::<Value>().await.expect("expected json envelope")
}

fn assert_timestamp(payload: &Value) {
    let timestamp = payload["timestamp"]
        .as_str()
        .expect("timestamp should be a string");
    DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be ISO-8601");
}

#[tokio::test]
async fn when_auth_raises_structured_rpc_error_then_gateway_keeps_status_and_message() {
    let base_url = support::ensure_gateway();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/auth/sign-in"))
        .json(&json!({ "email": "pilot@example.com", "password": "wrong-password" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);
    let payload = envelope(res).await;
    assert_eq!(payload["statusCode"], 401);
    assert_eq!(payload["message"], "Invalid credentials");
    assert_timestamp(&payload);
}

#[tokio::test]
async fn when_auth_raises_text_rpc_error_then_gateway_answers_500_with_text() {
    let base_url = support::ensure_gateway();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/auth/sign-up"))
        .json(&json!({ "email": "pilot@example.com", "password": "hunter2222" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let payload = envelope(res).await;
    assert_eq!(payload["statusCode"], 500);
    assert_eq!(payload["message"], "not found");
}

#[tokio::test]
async fn when_upstream_message_is_structured_then_its_status_is_used() {
    let base_url = support::ensure_gateway();

    let res = reqwest::get(format!("{base_url}/projects"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    let payload = envelope(res).await;
    assert_eq!(payload["statusCode"], 503);
    assert_eq!(payload["message"], "maintenance");
}

#[tokio::test]
async fn when_upstream_answers_flat_http_error_then_status_and_message_are_relayed() {
    let base_url = support::ensure_gateway();

    let res = reqwest::get(format!("{base_url}/projects/5"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let payload = envelope(res).await;
    assert_eq!(payload["statusCode"], 400);
    assert_eq!(payload["message"], "bad input");
}

#[tokio::test]
async fn when_upstream_answers_plain_text_error_then_text_becomes_message() {
    let base_url = support::ensure_gateway();

    let res = reqwest::get(format!("{base_url}/tasks"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let payload = envelope(res).await;
    assert_eq!(payload["message"], "boom");
}

#[tokio::test]
async fn when_upstream_success_body_is_not_json_then_gateway_answers_502() {
    let base_url = support::ensure_gateway();

    let res = reqwest::get(format!("{base_url}/tasks/1"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);
    let payload = envelope(res).await;
    assert_eq!(payload["message"], "invalid response from projects service");
}

#[tokio::test]
async fn when_auth_hello_is_requested_then_upstream_text_is_passed_through() {
    let base_url = support::ensure_gateway();

    let res = reqwest::get(format!("{base_url}/auth"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(
        res.text().await.expect("expected text body"),
        "Hello from auth service!"
    );
}

#[tokio::test]
async fn when_service_is_unreachable_then_gateway_answers_502() {
    // Reserve a port and release it so nothing is listening there.
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway port");
    let closed_url = format!("http://{}", closed.local_addr().expect("throwaway addr"));
    drop(closed);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind gateway port");
    let base_url = format!("http://{}", listener.local_addr().expect("gateway addr"));
    tokio::spawn(api_gateway::run(
        listener,
        support::test_config(&closed_url, &closed_url),
    ));

    let res = reqwest::get(format!("{base_url}/projects"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);
    let payload = envelope(res).await;
    assert_eq!(payload["statusCode"], 502);
    assert_eq!(payload["message"], "projects service unavailable");
}
