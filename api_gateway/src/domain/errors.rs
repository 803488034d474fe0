use serde_json::Value;
use std::fmt;

/// Every failure the gateway can answer a request with.
///
/// Upstream responses and local rejections are sorted into one of these
/// shapes where they enter the gateway; the error normalizer then matches on
/// them exhaustively to build the client-facing envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// A service answered with a non-string `message`: either a
    /// `{statusCode, message}` object or an array.
    StructuredUpstream(Value),
    /// A service raised a handled remote-procedure error.
    RemoteProcedure(RpcPayload),
    /// HTTP-style failure raised by the gateway or relayed from a service status line.
    GenericHttp(HttpFailure),
    Unclassified,
}

// Payload carried by a remote-procedure error.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcPayload {
    Text(String),
    Structured(Value),
}

/// Fields an HTTP-style failure may carry. Any of them can be missing;
/// `status` wins over `status_code`, and `response_message` over `message`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpFailure {
    pub status: Option<u16>,
    pub status_code: Option<u16>,
    pub response_message: Option<Value>,
    pub message: Option<Value>,
}

impl GatewayError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        GatewayError::GenericHttp(HttpFailure {
            status: Some(status),
            message: Some(Value::String(message.into())),
            ..HttpFailure::default()
        })
    }

    // Request validation failure; each violation is reported to the client.
    pub fn validation(violations: Vec<String>) -> Self {
        GatewayError::GenericHttp(HttpFailure {
            status: Some(400),
            response_message: Some(Value::from(violations)),
            message: Some(Value::String("Bad Request".to_string())),
            ..HttpFailure::default()
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::StructuredUpstream(_) => "structured_upstream",
            GatewayError::RemoteProcedure(_) => "remote_procedure",
            GatewayError::GenericHttp(_) => "generic_http",
            GatewayError::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::StructuredUpstream(payload) => {
                write!(f, "structured upstream error: {payload}")
            }
            GatewayError::RemoteProcedure(RpcPayload::Text(message)) => {
                write!(f, "remote procedure error: {message}")
            }
            GatewayError::RemoteProcedure(RpcPayload::Structured(payload)) => {
                write!(f, "remote procedure error: {payload}")
            }
            GatewayError::GenericHttp(failure) => {
                let status = failure.status.or(failure.status_code);
                match (status, failure.message.as_ref()) {
                    (Some(status), Some(message)) => write!(f, "http error {status}: {message}"),
                    (Some(status), None) => write!(f, "http error {status}"),
                    (None, Some(message)) => write!(f, "http error: {message}"),
                    (None, None) => write!(f, "http error"),
                }
            }
            GatewayError::Unclassified => write!(f, "unclassified error"),
        }
    }
}

impl std::error::Error for GatewayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn when_validation_error_is_built_then_violations_are_nested_under_response_message() {
        let error = GatewayError::validation(vec!["email should not be empty".to_string()]);

        let GatewayError::GenericHttp(failure) = error else {
            panic!("expected generic http error");
        };
        assert_eq!(failure.status, Some(400));
        assert_eq!(failure.response_message, Some(json!(["email should not be empty"])));
    }

    #[test]
    fn when_http_error_is_displayed_then_status_and_message_are_included() {
        let error = GatewayError::http(502, "auth service unavailable");

        assert_eq!(
            error.to_string(),
            r#"http error 502: "auth service unavailable""#
        );
    }
}
