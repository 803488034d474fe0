use crate::domain::{GatewayError, HttpFailure, RpcPayload};
use serde_json::Value;

// Boundary where upstream failures enter the gateway. Each one is sorted into
// a `GatewayError` shape here so the normalizer never looks at raw bodies.

// Sort a non-success upstream response by the shape of its body.
pub fn classify_failure(status: u16, body: &[u8]) -> GatewayError {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(mut fields)) => {
            if let Some(error) = fields.remove("error").filter(|error| !error.is_null()) {
                return GatewayError::RemoteProcedure(match error {
                    Value::String(message) => RpcPayload::Text(message),
                    other => RpcPayload::Structured(other),
                });
            }

            match fields.remove("message") {
                Some(message @ (Value::Object(_) | Value::Array(_))) => {
                    GatewayError::StructuredUpstream(message)
                }
                message => GatewayError::GenericHttp(HttpFailure {
                    status: Some(status),
                    status_code: fields
                        .get("statusCode")
                        .and_then(Value::as_u64)
                        .and_then(|code| u16::try_from(code).ok()),
                    response_message: None,
                    message,
                }),
            }
        }
        Ok(Value::String(message)) => GatewayError::GenericHttp(HttpFailure {
            status: Some(status),
            message: Some(Value::String(message)),
            ..HttpFailure::default()
        }),
        Ok(_) => GatewayError::GenericHttp(HttpFailure {
            status: Some(status),
            ..HttpFailure::default()
        }),
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            GatewayError::GenericHttp(HttpFailure {
                status: Some(status),
                message: (!text.is_empty()).then_some(Value::String(text)),
                ..HttpFailure::default()
            })
        }
    }
}

// Body of a non-success response. A body that cannot be read is logged and
// classified as empty, so only the upstream status survives.
pub fn failure_body<B: Default, E: std::fmt::Display>(service: &str, read: Result<B, E>) -> B {
    read.unwrap_or_else(|err| {
        tracing::warn!(service, error = %err, "upstream error body could not be read");
        B::default()
    })
}

// The service could not be reached, or did not answer in time.
pub fn transport_failure(service: &str, err: &reqwest::Error) -> GatewayError {
    tracing::warn!(service, error = %err, "upstream request failed");
    if err.is_timeout() {
        GatewayError::http(504, format!("{service} service timed out"))
    } else {
        GatewayError::http(502, format!("{service} service unavailable"))
    }
}

// The service answered with success but the body did not match the contract.
pub fn decode_failure(service: &str, err: &reqwest::Error) -> GatewayError {
    tracing::warn!(service, error = %err, "upstream response could not be decoded");
    GatewayError::http(502, format!("invalid response from {service} service"))
}
