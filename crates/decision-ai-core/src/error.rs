//! Error types for the decision SDK

use crate::logger::SDK_NAME;
use crate::transport::TransportResponse;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// The decision API answered with a non-2xx status
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request never produced a response (DNS, connection, timeout)
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The decision API rejected the login
    #[error(transparent)]
    Decision(#[from] DecisionError),

    /// Defaults and overrides did not form a valid decision request
    #[error("Failed to build decision request: {0}")]
    Build(#[source] serde_json::Error),

    /// A 2xx body that is not a decision response
    #[error("Invalid decision response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// Construction configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Non-2xx response from the decision API.
///
/// The remote decision is never trusted when this is raised.
#[derive(Error, Debug, Clone)]
#[error("{} - HTTP Error [{status_code}]", SDK_NAME)]
pub struct HttpError {
    /// HTTP status code
    pub status_code: u16,
    /// Raw response as returned by the transport
    pub response: TransportResponse,
    /// Parsed JSON body, or the raw text as a JSON string
    pub body: serde_json::Value,
}

impl HttpError {
    /// Build from a raw transport response
    pub fn from_response(response: TransportResponse) -> Self {
        let body = response
            .json()
            .unwrap_or_else(|_| serde_json::Value::String(response.body.clone()));

        Self {
            status_code: response.status,
            response,
            body,
        }
    }
}

/// The decision API classified the login as fraudulent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}: Reject Authentication", SDK_NAME)]
pub struct DecisionError {
    /// Always true for a reject raised by auto-decision
    pub is_fraudulent: bool,
}

impl DecisionError {
    /// Reject signal for a fraudulent login
    pub fn fraudulent() -> Self {
        Self {
            is_fraudulent: true,
        }
    }
}

/// Network-level failure from the transport
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request exceeded its timeout
    #[error("Request timed out after {}ms", .after.as_millis())]
    Timeout {
        after: Duration,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Connection, DNS or protocol failure
    #[error("Network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Failure reported by a custom transport
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Timeout after `after`, keeping the underlying error
    pub fn timeout(
        after: Duration,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        TransportError::Timeout {
            after,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_parses_json_body() {
        let response = TransportResponse::new(500, r#"{"code":"failed","message":"Failed"}"#);
        let error = HttpError::from_response(response);

        assert_eq!(error.status_code, 500);
        assert_eq!(error.body["code"], "failed");
        assert_eq!(error.response.body, r#"{"code":"failed","message":"Failed"}"#);
        assert_eq!(error.to_string(), "Precognitive - HTTP Error [500]");
    }

    #[test]
    fn test_http_error_keeps_raw_body() {
        let error = HttpError::from_response(TransportResponse::new(502, "Bad Gateway"));

        assert_eq!(error.status_code, 502);
        assert_eq!(error.body, serde_json::Value::String("Bad Gateway".to_string()));
    }

    #[test]
    fn test_decision_error() {
        let error = DecisionError::fraudulent();
        assert!(error.is_fraudulent);
        assert_eq!(error.to_string(), "Precognitive: Reject Authentication");
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::timeout(Duration::from_millis(5000), "deadline elapsed");
        assert_eq!(error.to_string(), "Request timed out after 5000ms");
        assert_eq!(
            std::error::Error::source(&error).map(|source| source.to_string()),
            Some("deadline elapsed".to_string())
        );

        let error = TransportError::Other("Mock".to_string());
        assert_eq!(error.to_string(), "Mock");
    }

    #[test]
    fn test_sdk_error_conversions() {
        let error: SdkError = DecisionError::fraudulent().into();
        assert!(matches!(error, SdkError::Decision(e) if e.is_fraudulent));

        let error: SdkError = TransportError::Other("down".to_string()).into();
        assert_eq!(error.to_string(), "down");

        let error: SdkError = HttpError::from_response(TransportResponse::new(404, "")).into();
        assert!(error.to_string().contains("[404]"));
    }

    #[test]
    fn test_config_error() {
        let error = SdkError::Config("apiKey is required".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("apiKey is required"));
    }
}
