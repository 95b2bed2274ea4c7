//! Error types for the HTTP adapter

use churn_application::GatewayError;
use thiserror::Error;

/// Result type alias for HTTP gateway operations
pub type Result<T> = std::result::Result<T, HttpGatewayError>;

/// Errors that can occur when talking to the prediction backend over HTTP
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response has status \"success\" but no response text")]
    MissingResponse,

    #[error("Backend reported an error: {0}")]
    Backend(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<HttpGatewayError> for GatewayError {
    fn from(err: HttpGatewayError) -> Self {
        match err {
            HttpGatewayError::Request(e) if e.is_timeout() => GatewayError::Timeout,
            HttpGatewayError::Request(e) => GatewayError::Connection(e.to_string()),
            HttpGatewayError::Backend(message) => GatewayError::Application(message),
            e @ (HttpGatewayError::ParseError { .. } | HttpGatewayError::MissingResponse) => {
                GatewayError::InvalidResponse(e.to_string())
            }
            HttpGatewayError::InvalidEndpoint(e) => GatewayError::Connection(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_maps_to_application() {
        let err: GatewayError = HttpGatewayError::Backend("Missing tenure".to_string()).into();
        assert_eq!(err, GatewayError::Application("Missing tenure".to_string()));
    }

    #[test]
    fn test_parse_error_maps_to_invalid_response() {
        let err: GatewayError = HttpGatewayError::ParseError {
            error: "expected value".to_string(),
            raw: "<html>".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
