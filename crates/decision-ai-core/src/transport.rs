//! Transport boundary between the decision client and the network
//!
//! The client only needs "send a request, get a status and a body back, or
//! fail at the network level". Concrete HTTP stacks implement [`Transport`].

use crate::error::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    POST,
}

/// Outbound request handed to a transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Absolute URL
    pub url: String,

    /// HTTP method
    pub method: HttpMethod,

    /// Request headers
    pub headers: Vec<(String, String)>,

    /// Serialized request body
    pub body: String,

    /// Per-request timeout, enforced by the transport
    pub timeout: Duration,
}

impl TransportRequest {
    /// Create a POST request with a body
    pub fn post(url: impl Into<String>, body: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::POST,
            headers: Vec::new(),
            body: body.into(),
            timeout,
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body text
    pub body: String,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Async transport trait
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and wait for its response.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;

    /// Get the name of this transport
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_request_builder() {
        let request = TransportRequest::post(
            "https://api.example.com/v1/decision/login",
            "{}",
            Duration::from_millis(5000),
        )
        .with_header("Authorization", "Basic abc");

        assert_eq!(request.method, HttpMethod::POST);
        assert_eq!(request.header("authorization"), Some("Basic abc"));
        assert_eq!(request.header("Content-Type"), None);
        assert_eq!(request.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_transport_response_ok() {
        assert!(TransportResponse::new(200, "").ok());
        assert!(TransportResponse::new(204, "").ok());
        assert!(!TransportResponse::new(302, "").ok());
        assert!(!TransportResponse::new(401, "").ok());
        assert!(!TransportResponse::new(500, "").ok());
    }

    #[test]
    fn test_transport_response_json() {
        let response = TransportResponse::new(200, r#"{"decision":"allow"}"#);
        assert_eq!(response.json().unwrap()["decision"], "allow");

        let response = TransportResponse::new(200, "not json");
        assert!(response.json().is_err());
    }
}
