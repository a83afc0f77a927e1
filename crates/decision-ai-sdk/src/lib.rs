//! Decision AI SDK
//!
//! Scores login events for fraud risk by calling the remote decision API.
//!
//! - [`LoginClient::decision`] returns the API's answer and surfaces every failure.
//! - [`LoginClient::auto_decision`] fails open: only a confirmed `reject`
//!   produces an error.
//!
//! ```rust,ignore
//! use decision_ai_sdk::{DecisionInput, DecisionOptions, LoginClient, LoginConfig, LoginRecord};
//!
//! let client = LoginClient::new(LoginConfig::new("api-key", "user", "password"))?;
//! let input = DecisionInput::new("event-id", "203.0.113.9", LoginRecord::new("user-1"));
//! let response = client.decision(&input, &DecisionOptions::default()).await?;
//! if !LoginClient::is_good_login(&response) {
//!     // block the login
//! }
//! ```

pub mod client;
pub mod config;
pub mod mock;
pub mod transport;

pub use client::{DecisionOptions, LoginClient, LoginClientBuilder};
pub use config::{BasicAuth, LoginConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use transport::ReqwestTransport;

// Re-export commonly used types from the core crate
pub use decision_ai_core::{
    deep_merge, is_good_login, ApiVersion, AuthenticationType, Channel, DecisionError,
    DecisionInput, DecisionRequest, DecisionResponse, DecisionStatus, HttpError, LogLevel,
    Logger, LoginOverrides, LoginRecord, LoginStatus, RequestOverrides, Result, SdkError,
    TracingLogger, Transport, TransportError, TransportRequest, TransportResponse,
};
