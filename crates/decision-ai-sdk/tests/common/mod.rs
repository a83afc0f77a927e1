//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use decision_ai_sdk::mock::{MockTransport, RecordingLogger};
use decision_ai_sdk::{
    AuthenticationType, Channel, DecisionInput, DecisionStatus, LoginClient, LoginConfig,
    LoginRecord, LoginStatus,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub const API_KEY: &str = "kasf8w-afsafs-1asffw";
pub const BASIC_AUTH: &str = "Basic dGVzdDp0ZXN0LXB3";

pub fn config() -> LoginConfig {
    LoginConfig::new(API_KEY, "test", "test-pw")
}

pub fn password_update_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 5, 16, 17, 37, 53).unwrap()
}

/// Login input used by most tests
pub fn input() -> DecisionInput {
    DecisionInput::new(
        "123456789",
        "127.0.0.1",
        LoginRecord::new("34294892831981")
            .with_authentication_type(AuthenticationType::Password)
            .with_channel(Channel::Web)
            .with_status(LoginStatus::Success)
            .with_password_update_time(password_update_time()),
    )
}

/// Wire body expected for [`input`], without `dateTime`
pub fn expected_record() -> Value {
    json!({
        "apiKey": API_KEY,
        "eventId": "123456789",
        "ipAddress": "127.0.0.1",
        "login": {
            "authenticationType": "password",
            "channel": "web",
            "passwordUpdateTime": "2019-05-16T17:37:53Z",
            "status": "success",
            "usedCaptcha": false,
            "userId": "34294892831981"
        }
    })
}

/// Strip `dateTime` after checking it is an RFC 3339 timestamp
pub fn without_date_time(mut body: Value) -> Value {
    let date_time = body
        .as_object_mut()
        .and_then(|map| map.remove("dateTime"))
        .expect("dateTime missing from request body");
    let date_time = date_time.as_str().expect("dateTime is not a string");
    assert!(
        DateTime::parse_from_rfc3339(date_time).is_ok(),
        "dateTime is not RFC 3339: {date_time}"
    );
    body
}

pub fn base_response(decision: DecisionStatus) -> Value {
    json!({
        "decision": decision,
        "score": 42,
        "confidence": 87,
        "signals": ["test", "test2"]
    })
}

pub struct Harness {
    pub client: LoginClient,
    pub transport: Arc<MockTransport>,
    pub logger: Arc<RecordingLogger>,
}

pub fn harness(transport: MockTransport) -> Harness {
    let transport = Arc::new(transport);
    let logger = Arc::new(RecordingLogger::new());
    let client = LoginClient::builder(config())
        .with_transport(transport.clone())
        .with_logger(logger.clone())
        .build()
        .unwrap();

    Harness {
        client,
        transport,
        logger,
    }
}
