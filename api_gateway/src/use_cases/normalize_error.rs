use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Clock, GatewayError, HttpFailure, RpcPayload};

pub const DEFAULT_STATUS: u16 = 500;
pub const DEFAULT_MESSAGE: &str = "Internal server error";

// Uniform JSON envelope returned to clients for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedError {
    pub status_code: u16,
    pub message: Value,
    pub timestamp: String,
}

/// Classifies a gateway error and stamps it with the current time.
///
/// The first matching rule wins:
/// 1. structured upstream message: `statusCode` and `message` from an object
///    payload, defaults for an array;
/// 2. remote-procedure error: a text payload is the message, an object payload
///    yields `statusCode` and `message`;
/// 3. HTTP-style error: `status`, then `statusCode`; nested response message,
///    then `message`.
///
/// Missing pieces fall back to `500` and `"Internal server error"`. Zero
/// statuses and empty strings count as missing.
pub fn normalize<C: Clock>(error: &GatewayError, clock: &C) -> NormalizedError {
    let (status_code, message) = classify(error);

    NormalizedError {
        status_code,
        message,
        timestamp: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn classify(error: &GatewayError) -> (u16, Value) {
    match error {
        GatewayError::StructuredUpstream(payload) => match payload {
            Value::Object(fields) => payload_fields(fields),
            _ => (DEFAULT_STATUS, default_message()),
        },
        // A text payload is used verbatim, even when empty.
        GatewayError::RemoteProcedure(RpcPayload::Text(message)) => {
            (DEFAULT_STATUS, Value::String(message.clone()))
        }
        GatewayError::RemoteProcedure(RpcPayload::Structured(payload)) => match payload {
            Value::Object(fields) => payload_fields(fields),
            _ => (DEFAULT_STATUS, default_message()),
        },
        GatewayError::GenericHttp(failure) => http_fields(failure),
        GatewayError::Unclassified => (DEFAULT_STATUS, default_message()),
    }
}

fn payload_fields(payload: &Map<String, Value>) -> (u16, Value) {
    let status = status_of(payload.get("statusCode")).unwrap_or(DEFAULT_STATUS);
    let message = message_of(payload.get("message")).unwrap_or_else(default_message);
    (status, message)
}

fn http_fields(failure: &HttpFailure) -> (u16, Value) {
    let status = failure
        .status
        .and_then(valid_status)
        .or_else(|| failure.status_code.and_then(valid_status))
        .unwrap_or(DEFAULT_STATUS);
    let message = message_of(failure.response_message.as_ref())
        .or_else(|| message_of(failure.message.as_ref()))
        .unwrap_or_else(default_message);
    (status, message)
}

fn status_of(value: Option<&Value>) -> Option<u16> {
    value
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .and_then(valid_status)
}

// Anything outside the HTTP status range, zero included, counts as absent.
fn valid_status(code: u16) -> Option<u16> {
    (100..=999).contains(&code).then_some(code)
}

fn message_of(value: Option<&Value>) -> Option<Value> {
    value.filter(|value| is_present(value)).cloned()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn default_message() -> Value {
    Value::String(DEFAULT_MESSAGE.to_string())
}
