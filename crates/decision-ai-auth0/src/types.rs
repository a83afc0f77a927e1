//! Auth0 rule inputs
//!
//! Plain value types for the `user` and `context` objects Auth0 passes to
//! rules. Only the fields the adapter reads are modelled; anything else in
//! the platform objects is ignored on deserialization.

use chrono::{DateTime, Utc};
use decision_ai_core::AuthenticationType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Auth0 user object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_password_reset: Option<DateTime<Utc>>,

    /// Linked identity providers
    #[serde(default)]
    pub identities: Vec<Identity>,
}

impl User {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// First identity linked through `connection`
    pub fn identity_for(&self, connection: &str) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| identity.connection.as_deref() == Some(connection))
    }
}

/// Identity provider linked to a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,

    #[serde(rename = "isSocial", default)]
    pub is_social: bool,
}

/// Auth0 context object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "clientID", default)]
    pub client_id: String,

    /// Connection used for this login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,

    pub protocol: ContextProtocol,

    #[serde(rename = "sessionID", default)]
    pub session_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,

    #[serde(default)]
    pub sso: Sso,

    #[serde(default)]
    pub authentication: Authentication,

    pub request: ContextRequest,

    #[serde(rename = "primaryUser", default, skip_serializing_if = "Option::is_none")]
    pub primary_user: Option<String>,
}

impl Context {
    /// Value of a query string parameter of the login request
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.request.query.get(name).and_then(Value::as_str)
    }
}

/// SSO state of the login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sso {
    #[serde(default)]
    pub with_auth0: bool,

    #[serde(default)]
    pub with_dbconn: bool,

    /// Clients the user already has an SSO session with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_clients: Option<Vec<String>>,
}

impl Sso {
    pub fn has_current_clients(&self) -> bool {
        self.current_clients
            .as_ref()
            .is_some_and(|clients| !clients.is_empty())
    }
}

/// Authentication methods completed in the current session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authentication {
    #[serde(default)]
    pub methods: Vec<AuthenticationMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationMethod {
    /// `pwd`, `mfa`, `federated`, ...
    pub name: String,

    /// Milliseconds since the epoch
    pub timestamp: i64,
}

impl AuthenticationMethod {
    pub fn new(name: impl Into<String>, timestamp: i64) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }
}

/// Login request as seen by Auth0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextRequest {
    pub ip: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Query string parameters; Auth0 sends an empty string when there are none
    #[serde(default)]
    pub query: Value,

    #[serde(rename = "userAgent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoip: Option<Value>,
}

/// Protocol used for the login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContextProtocol {
    OidcBasicProfile,
    OidcImplicitProfile,
    OAuth2ResourceOwner,
    OAuth2ResourceOwnerJwtBearer,
    OAuth2Password,
    OAuth2RefreshToken,
    Samlp,
    WsFed,
    WsTrustUsernameMixed,
    Delegation,
    RedirectCallback,
    /// A protocol this adapter does not know
    Other(String),
}

impl ContextProtocol {
    pub fn as_str(&self) -> &str {
        match self {
            ContextProtocol::OidcBasicProfile => "oidc-basic-profile",
            ContextProtocol::OidcImplicitProfile => "oidc-implicit-profile",
            ContextProtocol::OAuth2ResourceOwner => "oauth2-resource-owner",
            ContextProtocol::OAuth2ResourceOwnerJwtBearer => "oauth2-resource-owner-jwt-bearer",
            ContextProtocol::OAuth2Password => "oauth2-password",
            ContextProtocol::OAuth2RefreshToken => "oauth2-refresh-token",
            ContextProtocol::Samlp => "samlp",
            ContextProtocol::WsFed => "wsfed",
            ContextProtocol::WsTrustUsernameMixed => "wstrust-usernamemixed",
            ContextProtocol::Delegation => "delegation",
            ContextProtocol::RedirectCallback => "redirect-callback",
            ContextProtocol::Other(protocol) => protocol,
        }
    }

    /// Authentication type implied by the protocol alone.
    ///
    /// Delegation, redirect callbacks and unknown protocols imply none.
    pub fn authentication_type(&self) -> Option<AuthenticationType> {
        match self {
            ContextProtocol::OidcBasicProfile
            | ContextProtocol::OidcImplicitProfile
            | ContextProtocol::OAuth2ResourceOwner
            | ContextProtocol::OAuth2Password => Some(AuthenticationType::Password),
            ContextProtocol::Samlp
            | ContextProtocol::WsFed
            | ContextProtocol::WsTrustUsernameMixed => Some(AuthenticationType::SingleSignOn),
            ContextProtocol::OAuth2RefreshToken | ContextProtocol::OAuth2ResourceOwnerJwtBearer => {
                Some(AuthenticationType::Key)
            }
            ContextProtocol::Delegation | ContextProtocol::RedirectCallback => None,
            ContextProtocol::Other(_) => None,
        }
    }
}

impl From<String> for ContextProtocol {
    fn from(protocol: String) -> Self {
        match protocol.as_str() {
            "oidc-basic-profile" => ContextProtocol::OidcBasicProfile,
            "oidc-implicit-profile" => ContextProtocol::OidcImplicitProfile,
            "oauth2-resource-owner" => ContextProtocol::OAuth2ResourceOwner,
            "oauth2-resource-owner-jwt-bearer" => ContextProtocol::OAuth2ResourceOwnerJwtBearer,
            "oauth2-password" => ContextProtocol::OAuth2Password,
            "oauth2-refresh-token" => ContextProtocol::OAuth2RefreshToken,
            "samlp" => ContextProtocol::Samlp,
            "wsfed" => ContextProtocol::WsFed,
            "wstrust-usernamemixed" => ContextProtocol::WsTrustUsernameMixed,
            "delegation" => ContextProtocol::Delegation,
            "redirect-callback" => ContextProtocol::RedirectCallback,
            _ => ContextProtocol::Other(protocol),
        }
    }
}

impl From<&str> for ContextProtocol {
    fn from(protocol: &str) -> Self {
        ContextProtocol::from(protocol.to_string())
    }
}

impl From<ContextProtocol> for String {
    fn from(protocol: ContextProtocol) -> Self {
        protocol.as_str().to_string()
    }
}

impl fmt::Display for ContextProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
