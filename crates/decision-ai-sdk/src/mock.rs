//! Mock transport and recording logger for testing

use async_trait::async_trait;
use decision_ai_core::{LogLevel, Logger, Transport, TransportError, TransportRequest, TransportResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

enum MockReply {
    Response(TransportResponse),
    Error(TransportError),
}

/// Mock transport replaying queued replies in order and recording every
/// request it receives
pub struct MockTransport {
    name: String,
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    /// Create a mock with no queued replies
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response with a raw body
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(MockReply::Response(TransportResponse::new(status, body)))
    }

    /// Queue a response with a JSON body
    pub fn respond_json(self, status: u16, body: serde_json::Value) -> Self {
        self.respond(status, body.to_string())
    }

    /// Queue a network-level failure
    pub fn fail(self, error: TransportError) -> Self {
        self.push(MockReply::Error(error))
    }

    fn push(self, reply: MockReply) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|requests| requests.len()).unwrap_or(0)
    }

    /// Body of the last request parsed as JSON
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.requests
            .lock()
            .ok()?
            .last()
            .and_then(|request| serde_json::from_str(&request.body).ok())
    }

    /// True when every queued reply has been consumed
    pub fn is_done(&self) -> bool {
        self.replies.lock().map(|replies| replies.is_empty()).unwrap_or(false)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let reply = self.replies.lock().ok().and_then(|mut replies| replies.pop_front());
        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Error(error)) => Err(error),
            None => Err(TransportError::Other("No mock reply queued".to_string())),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Logger keeping every message in memory
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `(level, message)` pairs in order
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages recorded at `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, level: LogLevel, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request() -> TransportRequest {
        TransportRequest::post("http://mock/v1/decision/login", r#"{"a":1}"#, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let transport = MockTransport::new()
            .respond(200, "{}")
            .fail(TransportError::Other("Mock".to_string()));

        assert_eq!(transport.send(request()).await.unwrap().status, 200);
        assert!(matches!(
            transport.send(request()).await,
            Err(TransportError::Other(message)) if message == "Mock"
        ));
        assert!(transport.is_done());
        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.last_body().unwrap()["a"], 1);
    }

    #[tokio::test]
    async fn test_mock_without_replies_fails() {
        let transport = MockTransport::new();
        assert!(transport.send(request()).await.is_err());
    }

    #[test]
    fn test_recording_logger() {
        let logger = RecordingLogger::new();
        logger.debug("one");
        logger.error("two");

        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.messages(LogLevel::Error), vec!["two".to_string()]);
        assert!(logger.messages(LogLevel::Warn).is_empty());
    }
}
