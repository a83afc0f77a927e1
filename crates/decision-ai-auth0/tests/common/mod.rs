//! Common test utilities for Auth0 adapter tests

#![allow(dead_code)]

use decision_ai_auth0::{Auth0, Context, DecisionStatus, LoginConfig, User};
use decision_ai_sdk::mock::{MockTransport, RecordingLogger};
use serde_json::{json, Value};
use std::sync::Arc;

pub const API_KEY: &str = "kasf8w-afsafs-1asffw";

pub fn config() -> LoginConfig {
    LoginConfig::new(API_KEY, "test", "test-pw")
}

/// Rule inputs of one login
pub struct Login {
    pub user: User,
    pub context: Context,
}

fn parse(fixture: &str) -> Login {
    let value: Value = serde_json::from_str(fixture).expect("invalid fixture JSON");
    Login {
        user: serde_json::from_value(value["user"].clone()).expect("invalid fixture user"),
        context: serde_json::from_value(value["context"].clone()).expect("invalid fixture context"),
    }
}

pub fn password_login() -> Login {
    parse(include_str!("../fixtures/password.json"))
}

pub fn authorize_login() -> Login {
    parse(include_str!("../fixtures/authorize.json"))
}

pub fn google_login() -> Login {
    parse(include_str!("../fixtures/google.json"))
}

pub fn facebook_login() -> Login {
    parse(include_str!("../fixtures/facebook.json"))
}

pub fn yahoo_login() -> Login {
    parse(include_str!("../fixtures/yahoo.json"))
}

/// Small password login without a `cognition_event_id` query parameter
pub fn basic_login() -> Login {
    parse(
        &json!({
            "user": {
                "user_id": "34294892831981",
                "name": "test",
                "email": "test@example.com",
                "username": "test-example",
                "updated_at": "2019-05-16T17:37:53Z",
                "last_password_reset": "2019-05-16T17:37:53Z"
            },
            "context": {
                "clientID": "123456789",
                "sessionID": "123456789",
                "protocol": "oidc-basic-profile",
                "authentication": { "methods": [{ "name": "pwd", "timestamp": 1558032612724i64 }] },
                "request": {
                    "userAgent": "test",
                    "ip": "127.0.0.1",
                    "hostname": "example.com",
                    "query": "",
                    "geoip": { "country_code": "us", "city_name": "springville" }
                }
            }
        })
        .to_string(),
    )
}

/// Wire body expected for [`basic_login`], without `dateTime` and `_custom`
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
            "usedRememberMe": false,
            "userId": "34294892831981"
        }
    })
}

/// Remove `dateTime` and `_custom`, returning the custom block
pub fn split_body(mut body: Value) -> (Value, Value) {
    let map = body.as_object_mut().expect("request body is not an object");
    assert!(map.remove("dateTime").is_some(), "dateTime missing from request body");
    let custom = map.remove("_custom").unwrap_or(Value::Null);
    (body, custom)
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
    pub auth0: Auth0,
    pub transport: Arc<MockTransport>,
    pub logger: Arc<RecordingLogger>,
}

pub fn harness(transport: MockTransport) -> Harness {
    let transport = Arc::new(transport);
    let logger = Arc::new(RecordingLogger::new());
    let auth0 = Auth0::builder(config())
        .with_transport(transport.clone())
        .with_logger(logger.clone())
        .build()
        .unwrap();

    Harness {
        auth0,
        transport,
        logger,
    }
}
