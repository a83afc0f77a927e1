//! Decision AI adapter for Auth0 rules
//!
//! [`Auth0`] turns the `user` and `context` objects of an Auth0 rule into a
//! login decision request. It derives the authentication type and event id,
//! reports Auth0-specific data under `_custom.auth0` and can strip personal
//! data from it (`privacy_mode`).
//!
//! ```rust,ignore
//! use decision_ai_auth0::{Auth0, Auth0Options, LoginConfig};
//!
//! let auth0 = Auth0::new(LoginConfig::load()?)?;
//! auth0
//!     .run_rule(user, context, |err, user, context| callback(err, user, context), &Auth0Options::default())
//!     .await;
//! ```

pub mod authentication;
pub mod client;
pub mod types;

pub use authentication::authentication_type;
pub use client::{Auth0, Auth0Builder, Auth0Options, UserIdGetter};
pub use types::{
    Authentication, AuthenticationMethod, Context, ContextProtocol, ContextRequest, Identity, Sso,
    User,
};

pub use decision_ai_sdk::{
    AuthenticationType, Channel, DecisionError, DecisionResponse, DecisionStatus, HttpError,
    LogLevel, Logger, LoginConfig, LoginOverrides, RequestOverrides, Result, SdkError,
};
