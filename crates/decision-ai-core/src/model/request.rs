//! Decision request model and request building

use super::{AuthenticationType, Channel, LoginStatus, RequestOverrides};
use crate::error::{Result, SdkError};
use crate::merge::deep_merge;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login record nested in every decision request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRecord {
    /// Id of the user logging in
    pub user_id: String,

    /// Channel the login came through
    pub channel: Channel,

    /// Whether a captcha was solved
    pub used_captcha: bool,

    /// Whether "remember me" was ticked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_remember_me: Option<bool>,

    /// How the user authenticated, omitted when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,

    /// Whether the login attempt succeeded
    pub status: LoginStatus,

    /// Last password change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_update_time: Option<DateTime<Utc>>,

    /// Last username change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name_update_time: Option<DateTime<Utc>>,
}

impl LoginRecord {
    /// Successful web login without captcha for `user_id`
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            channel: Channel::Web,
            used_captcha: false,
            used_remember_me: None,
            authentication_type: None,
            status: LoginStatus::Success,
            password_update_time: None,
            user_name_update_time: None,
        }
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_authentication_type(mut self, authentication_type: AuthenticationType) -> Self {
        self.authentication_type = Some(authentication_type);
        self
    }

    pub fn with_status(mut self, status: LoginStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_password_update_time(mut self, time: DateTime<Utc>) -> Self {
        self.password_update_time = Some(time);
        self
    }
}

/// Caller-supplied request: everything except the API key, which the
/// client always injects itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInput {
    /// Id correlating the login with client-side events
    pub event_id: String,

    /// Time of the login, defaults to the time of the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,

    /// Source IP of the login
    pub ip_address: String,

    /// Login record
    pub login: LoginRecord,

    /// Open-ended custom data
    #[serde(rename = "_custom", default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,

    /// Opaque client payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_payload: Option<Value>,
}

impl DecisionInput {
    /// Create an input from the required fields
    pub fn new(event_id: impl Into<String>, ip_address: impl Into<String>, login: LoginRecord) -> Self {
        Self {
            event_id: event_id.into(),
            date_time: None,
            ip_address: ip_address.into(),
            login,
            custom: None,
            client_payload: None,
        }
    }

    pub fn with_date_time(mut self, date_time: DateTime<Utc>) -> Self {
        self.date_time = Some(date_time);
        self
    }

    pub fn with_custom(mut self, custom: Map<String, Value>) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn with_client_payload(mut self, payload: Value) -> Self {
        self.client_payload = Some(payload);
        self
    }
}

/// Final wire payload posted to the decision API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub api_key: String,
    pub event_id: String,
    pub date_time: DateTime<Utc>,
    pub ip_address: String,
    pub login: LoginRecord,
    #[serde(rename = "_custom", default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_payload: Option<Value>,
}

impl DecisionRequest {
    /// Build the wire payload.
    ///
    /// `{dateTime: now}` is the base, the input is merged onto it, then the
    /// overrides, and finally `apiKey` is written so it can never be
    /// overridden. The merged document must still be a valid request,
    /// otherwise [`SdkError::Build`] is returned.
    pub fn build(
        api_key: &str,
        now: DateTime<Utc>,
        input: &DecisionInput,
        overrides: Option<&RequestOverrides>,
    ) -> Result<Self> {
        let mut document = Value::Object(Map::from_iter([(
            "dateTime".to_string(),
            serde_json::to_value(now).map_err(SdkError::Build)?,
        )]));
        deep_merge(&mut document, serde_json::to_value(input).map_err(SdkError::Build)?);

        if let Some(overrides) = overrides {
            deep_merge(&mut document, overrides.to_value()?);
        }

        if let Value::Object(map) = &mut document {
            map.insert("apiKey".to_string(), Value::String(api_key.to_string()));
        }

        serde_json::from_value(document).map_err(SdkError::Build)
    }
}
