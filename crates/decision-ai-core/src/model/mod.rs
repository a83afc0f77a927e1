//! Wire model of the decision API

mod overrides;
mod request;
mod response;

pub use overrides::{LoginOverrides, RequestOverrides};
pub use request::{DecisionInput, DecisionRequest, LoginRecord};
pub use response::{is_good_login, DecisionResponse};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decision API version, selects the URL path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
}

impl ApiVersion {
    /// Path segment for this version
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision returned by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Allow,
    Review,
    Reject,
}

/// Channel the login came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Web,
    Desktop,
    App,
}

/// Outcome of the login attempt being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    #[default]
    Success,
    Failure,
}

/// How the user authenticated. An unknown type is expressed as `None`
/// on the owning field and omitted from the wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationType {
    Password,
    TwoFactor,
    SingleSignOn,
    SocialSignOn,
    ClientStorage,
    Key,
}
