//! Core login decision client

use crate::config::LoginConfig;
use crate::transport::ReqwestTransport;
use chrono::Utc;
use decision_ai_core::{
    is_good_login, DecisionError, DecisionInput, DecisionRequest, DecisionResponse,
    DecisionStatus, HttpError, Logger, RequestOverrides, Result, SdkError, TracingLogger,
    Transport, TransportRequest,
};
use std::sync::Arc;
use std::time::Duration;

/// Per-call options
#[derive(Debug, Clone, Default)]
pub struct DecisionOptions {
    /// Overrides the configured request timeout
    pub timeout: Option<Duration>,

    /// Deep-merged onto the request before sending
    pub overrides: Option<RequestOverrides>,

    /// Outcome assumed by auto-decision when the decision call fails;
    /// `allow` when unset
    pub default_response: Option<DecisionStatus>,
}

impl DecisionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_overrides(mut self, overrides: RequestOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_default_response(mut self, default_response: DecisionStatus) -> Self {
        self.default_response = Some(default_response);
        self
    }
}

/// Client for the login decision endpoint.
///
/// Holds only immutable configuration, so one instance can serve
/// concurrent calls.
pub struct LoginClient {
    api_key: String,
    authorization: String,
    endpoint: String,
    timeout: Duration,
    logger: Arc<dyn Logger>,
    transport: Arc<dyn Transport>,
}

impl LoginClient {
    /// Create a client with the default logger and transport
    pub fn new(config: LoginConfig) -> Result<Self> {
        LoginClientBuilder::new(config).build()
    }

    /// Start building a client
    pub fn builder(config: LoginConfig) -> LoginClientBuilder {
        LoginClientBuilder::new(config)
    }

    /// Logger used by this client
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send login data for scoring and return the API's answer.
    ///
    /// Every failure surfaces: a non-2xx status is an [`SdkError::Http`] and
    /// the remote decision is not trusted; a network failure is returned
    /// unchanged as [`SdkError::Transport`].
    pub async fn decision(
        &self,
        input: &DecisionInput,
        options: &DecisionOptions,
    ) -> Result<DecisionResponse> {
        let request =
            DecisionRequest::build(&self.api_key, Utc::now(), input, options.overrides.as_ref())?;
        self.send(&request, options.timeout).await
    }

    /// Send login data for scoring, failing open.
    ///
    /// Returns an error only when the API answered `reject`. Any failure of
    /// the call itself is logged and resolved as `options.default_response`
    /// (allow when unset), so an outage of the scoring service never blocks
    /// logins.
    pub async fn auto_decision(
        &self,
        input: &DecisionInput,
        options: &DecisionOptions,
    ) -> std::result::Result<(), DecisionError> {
        let outcome = self.decision(input, options).await;
        self.settle_auto_decision(outcome, options.default_response)
    }

    /// Fold the outcome of a decision call into the auto-decision result.
    pub fn settle_auto_decision(
        &self,
        outcome: Result<DecisionResponse>,
        default_response: Option<DecisionStatus>,
    ) -> std::result::Result<(), DecisionError> {
        let fallback = default_response.unwrap_or(DecisionStatus::Allow);
        let decision = match outcome {
            Ok(DecisionResponse {
                decision: Some(decision),
                ..
            }) => decision,
            Ok(_) => {
                self.logger.warn(&format!(
                    "Auto-Decision - response without decision, using default response '{:?}'",
                    fallback
                ));
                fallback
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Auto-Decision failed, using default response '{:?}' - {}",
                    fallback, err
                ));
                fallback
            }
        };

        if DecisionResponse::with_decision(decision).is_good_login() {
            Ok(())
        } else {
            self.logger.info("Auto-Decision - reject");
            Err(DecisionError::fraudulent())
        }
    }

    /// The admission policy: `allow` and `review` are good logins
    pub fn is_good_login(response: &DecisionResponse) -> bool {
        is_good_login(response)
    }

    async fn send(
        &self,
        request: &DecisionRequest,
        timeout: Option<Duration>,
    ) -> Result<DecisionResponse> {
        let body = serde_json::to_string(request).map_err(SdkError::Build)?;
        self.logger.debug(&format!("REQUEST BODY - {}", body));

        let transport_request =
            TransportRequest::post(&self.endpoint, body, timeout.unwrap_or(self.timeout))
                .with_header("Authorization", &self.authorization)
                .with_header("Content-Type", "application/json");

        let response = match self.transport.send(transport_request).await {
            Ok(response) => response,
            Err(err) => {
                self.logger.error(&format!(
                    "Decision request via {} failed - {}",
                    self.transport.name(),
                    err
                ));
                return Err(err.into());
            }
        };
        self.logger.debug(&format!("RESPONSE BODY - {}", response.body));

        if !response.ok() {
            let err = HttpError::from_response(response);
            self.logger.error(&format!("{} - {}", err, err.body));
            return Err(err.into());
        }

        if response.body.trim().is_empty() {
            return Ok(DecisionResponse::default());
        }
        serde_json::from_str(&response.body).map_err(SdkError::InvalidResponse)
    }
}

/// Builder for [`LoginClient`]
pub struct LoginClientBuilder {
    config: LoginConfig,
    logger: Option<Arc<dyn Logger>>,
    transport: Option<Arc<dyn Transport>>,
}

impl LoginClientBuilder {
    pub fn new(config: LoginConfig) -> Self {
        Self {
            config,
            logger: None,
            transport: None,
        }
    }

    /// Replace the default logger; `log_level` is then ignored
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Replace the default reqwest transport
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<LoginClient> {
        self.config.validate()?;

        let logger = match self.logger {
            Some(logger) => logger,
            None => Arc::new(TracingLogger::new(self.config.log_level)),
        };
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(LoginClient {
            authorization: self.config.auth.header_value(),
            endpoint: self.config.endpoint(),
            timeout: self.config.timeout(),
            api_key: self.config.api_key,
            logger,
            transport,
        })
    }
}
