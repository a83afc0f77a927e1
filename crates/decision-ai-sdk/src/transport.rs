//! reqwest-backed transport

use async_trait::async_trait;
use decision_ai_core::{
    HttpMethod, Result, SdkError, Transport, TransportError, TransportRequest, TransportResponse,
};
use reqwest::{Client, Method};
use std::time::Duration;

/// Transport sending requests with a shared [`reqwest::Client`].
///
/// Connection pooling is reqwest's; the timeout is applied per request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Use an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn map_error(error: reqwest::Error, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(timeout, error)
    } else {
        TransportError::Network(Box::new(error))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let TransportRequest {
            url,
            method,
            headers,
            body,
            timeout,
        } = request;

        let method = match method {
            HttpMethod::POST => Method::POST,
        };

        tracing::debug!("Sending decision request: {} {}", method, url);

        let mut builder = self.client.request(method, &url).timeout(timeout).body(body);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| map_error(e, timeout))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| map_error(e, timeout))?;

        Ok(TransportResponse::new(status, body))
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}
