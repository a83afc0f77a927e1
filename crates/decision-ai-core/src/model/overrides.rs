//! Partial decision request deep-merged onto computed defaults

use super::{AuthenticationType, Channel, LoginStatus};
use crate::error::{Result, SdkError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Override bag for a decision request.
///
/// Only fields that are set are merged; unset fields leave the computed
/// default intact. `api_key` is accepted for shape compatibility but the
/// client's configured key always wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<LoginOverrides>,

    /// Merged recursively into `_custom`
    #[serde(rename = "_custom", default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_payload: Option<Value>,
}

/// Override bag for the nested login record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_captcha: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_remember_me: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LoginStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_update_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name_update_time: Option<DateTime<Utc>>,
}

impl RequestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    pub fn with_date_time(mut self, date_time: DateTime<Utc>) -> Self {
        self.date_time = Some(date_time);
        self
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    pub fn with_login(mut self, login: LoginOverrides) -> Self {
        self.login = Some(login);
        self
    }

    pub fn with_custom(mut self, custom: Value) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn with_client_payload(mut self, payload: Value) -> Self {
        self.client_payload = Some(payload);
        self
    }

    /// Force the login status, keeping every other override
    pub fn force_login_status(mut self, status: LoginStatus) -> Self {
        self.login.get_or_insert_with(LoginOverrides::default).status = Some(status);
        self
    }

    /// JSON patch form of the overrides
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(SdkError::Build)
    }
}

impl LoginOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_used_captcha(mut self, used_captcha: bool) -> Self {
        self.used_captcha = Some(used_captcha);
        self
    }

    pub fn with_authentication_type(mut self, authentication_type: AuthenticationType) -> Self {
        self.authentication_type = Some(authentication_type);
        self
    }

    pub fn with_status(mut self, status: LoginStatus) -> Self {
        self.status = Some(status);
        self
    }
}
