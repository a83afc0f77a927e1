//! Decision AI Core - shared types for the login scoring SDK
//!
//! This crate provides the pieces every client of the decision API needs:
//! - The wire model for decision requests and responses
//! - Request overrides and the deep-merge used to apply them
//! - The error taxonomy (HTTP, transport, reject, build failures)
//! - The pluggable leveled logger
//! - The transport boundary used to reach the remote API

pub mod error;
pub mod logger;
pub mod merge;
pub mod model;
pub mod transport;

pub use error::{DecisionError, HttpError, Result, SdkError, TransportError};
pub use logger::{LogLevel, Logger, TracingLogger, SDK_NAME};
pub use merge::deep_merge;
pub use model::{
    is_good_login, ApiVersion, AuthenticationType, Channel, DecisionInput, DecisionRequest,
    DecisionResponse, DecisionStatus, LoginOverrides, LoginRecord, LoginStatus,
    RequestOverrides,
};
pub use transport::{HttpMethod, Transport, TransportRequest, TransportResponse};
