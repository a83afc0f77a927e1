//! Auth0 rule adapter

use crate::authentication::authentication_type;
use crate::types::{AuthenticationMethod, Context, ContextProtocol, User};
use chrono::{DateTime, Utc};
use decision_ai_core::{
    is_good_login, AuthenticationType, DecisionError, DecisionInput, DecisionResponse,
    DecisionStatus, Logger, LoginRecord, LoginStatus, RequestOverrides, Result, SdkError,
    Transport,
};
use decision_ai_sdk::{DecisionOptions, LoginClient, LoginClientBuilder, LoginConfig};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Version of the `_custom.auth0` block layout
const SDK_VERSION: &str = "1.0";

/// Query parameter carrying the client-side event id
const EVENT_ID_PARAM: &str = "cognition_event_id";

/// Signals reported by [`Auth0::auth_failure`] when the API sent none
const FAILED_TO_DECISION: &str = "failed_to_decision";

/// Token reported by [`Auth0::auth_failure`] when the API sent none
const UNKNOWN_TOKEN: &str = "unknown";

/// Derives the outbound user id from the rule inputs
pub type UserIdGetter = Arc<dyn Fn(&User, &Context) -> String + Send + Sync>;

/// Per-call options of the adapter
#[derive(Debug, Clone, Default)]
pub struct Auth0Options {
    /// Overrides the configured request timeout
    pub timeout: Option<Duration>,

    /// Deep-merged onto the derived request before sending
    pub overrides: Option<RequestOverrides>,

    /// Outcome assumed by auto-decision when the decision call fails
    pub default_response: Option<DecisionStatus>,

    /// Strip personal data from the `_custom.auth0.user` block
    pub privacy_mode: bool,
}

impl Auth0Options {
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

    pub fn with_privacy_mode(mut self, privacy_mode: bool) -> Self {
        self.privacy_mode = privacy_mode;
        self
    }

    fn decision_options(&self) -> DecisionOptions {
        DecisionOptions {
            timeout: self.timeout,
            overrides: self.overrides.clone(),
            default_response: self.default_response,
        }
    }
}

/// `_custom.auth0` block
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Auth0Custom<'a> {
    sdk_version: &'static str,
    user: UserData<'a>,
    context: ContextData<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<&'a str>,
    phone_number_verified: bool,
    blocked: bool,
}

impl<'a> UserData<'a> {
    fn from_user(user: &'a User) -> Self {
        Self {
            updated: user.updated_at,
            full_name: user.name.as_deref(),
            last_name: user.family_name.as_deref(),
            first_name: user.given_name.as_deref(),
            username: user.username.as_deref(),
            email: user.email.as_deref(),
            email_verified: user.email_verified.unwrap_or(false),
            phone_number: user.phone_number.as_deref(),
            phone_number_verified: user.phone_verified.unwrap_or(false),
            blocked: user.blocked.unwrap_or(false),
        }
    }

    /// Drop the fields identifying the person
    fn redact(&mut self) {
        self.full_name = None;
        self.last_name = None;
        self.first_name = None;
        self.email = None;
        self.phone_number = None;
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextData<'a> {
    authentication_methods: &'a [AuthenticationMethod],
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    geo_ip: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sso_current_clients: Option<&'a [String]>,
    protocol: &'a str,
}

impl<'a> ContextData<'a> {
    fn from_context(context: &'a Context) -> Self {
        Self {
            authentication_methods: &context.authentication.methods,
            stats: context.stats.as_ref(),
            geo_ip: context.request.geoip.as_ref(),
            primary_user: context.primary_user.as_deref(),
            sso_current_clients: context.sso.current_clients.as_deref(),
            protocol: context.protocol.as_str(),
        }
    }
}

/// Decision client for Auth0 rules.
///
/// Translates the rule's `user` and `context` into a login decision request
/// and delegates to [`LoginClient`].
pub struct Auth0 {
    base: LoginClient,
    get_user_id: Option<UserIdGetter>,
}

impl Auth0 {
    /// Create an adapter with the default logger and transport
    pub fn new(config: LoginConfig) -> Result<Self> {
        Auth0Builder::new(config).build()
    }

    /// Start building an adapter
    pub fn builder(config: LoginConfig) -> Auth0Builder {
        Auth0Builder::new(config)
    }

    /// Underlying login client
    pub fn login_client(&self) -> &LoginClient {
        &self.base
    }

    fn logger(&self) -> &Arc<dyn Logger> {
        self.base.logger()
    }

    /// Send the login for scoring and return the API's answer.
    ///
    /// Every failure surfaces, exactly as [`LoginClient::decision`].
    pub async fn decision(
        &self,
        user: &User,
        context: &Context,
        options: &Auth0Options,
    ) -> Result<DecisionResponse> {
        let input = self.build_input(user, context, options)?;
        self.base.decision(&input, &options.decision_options()).await
    }

    /// Send the login for scoring, failing open.
    ///
    /// Only a confirmed bad decision is an error. A request that cannot be
    /// built (e.g. a malformed override) is handled like a failed call.
    pub async fn auto_decision(
        &self,
        user: &User,
        context: &Context,
        options: &Auth0Options,
    ) -> std::result::Result<(), DecisionError> {
        let outcome = match self.build_input(user, context, options) {
            Ok(input) => self.base.decision(&input, &options.decision_options()).await,
            Err(err) => Err(err),
        };
        self.base.settle_auto_decision(outcome, options.default_response)
    }

    /// Run auto-decision the way an Auth0 rule does: `callback` is invoked
    /// once with the reject error, if any, and the rule inputs.
    pub async fn run_rule<F, R>(
        &self,
        user: User,
        context: Context,
        callback: F,
        options: &Auth0Options,
    ) -> R
    where
        F: FnOnce(Option<DecisionError>, User, Context) -> R,
    {
        let result = self.auto_decision(&user, &context, options).await;
        callback(result.err(), user, context)
    }

    /// Report a failed login attempt.
    ///
    /// The request is sent with `login.status = failure` and the answer is
    /// always a reject; missing fields are filled with placeholders.
    pub async fn auth_failure(
        &self,
        user: &User,
        context: &Context,
        options: &Auth0Options,
    ) -> Result<DecisionResponse> {
        let overrides = options
            .overrides
            .clone()
            .unwrap_or_default()
            .force_login_status(LoginStatus::Failure);
        let options = Auth0Options {
            overrides: Some(overrides),
            ..options.clone()
        };

        let response = self.decision(user, context, &options).await?;

        Ok(DecisionResponse {
            decision: Some(DecisionStatus::Reject),
            signals: Some(
                response
                    .signals
                    .unwrap_or_else(|| vec![FAILED_TO_DECISION.to_string()]),
            ),
            score: Some(response.score.unwrap_or(0.0)),
            confidence: Some(response.confidence.unwrap_or(0.0)),
            token: Some(
                response
                    .token
                    .filter(|token| !token.is_empty())
                    .unwrap_or_else(|| UNKNOWN_TOKEN.to_string()),
            ),
        })
    }

    /// The admission policy: `allow` and `review` are good logins
    pub fn is_good_login(response: &DecisionResponse) -> bool {
        is_good_login(response)
    }

    /// Authentication type implied by the context's protocol.
    ///
    /// Unrecognised protocols yield `None` and are logged as a warning.
    pub fn protocol_authentication_type(&self, context: &Context) -> Option<AuthenticationType> {
        if let ContextProtocol::Other(protocol) = &context.protocol {
            self.logger().warn(&format!("Unrecognised protocol '{}'", protocol));
        }
        context.protocol.authentication_type()
    }

    fn build_input(
        &self,
        user: &User,
        context: &Context,
        options: &Auth0Options,
    ) -> Result<DecisionInput> {
        let mut user_data = UserData::from_user(user);
        if options.privacy_mode {
            user_data.redact();
        }
        let custom = Auth0Custom {
            sdk_version: SDK_VERSION,
            user: user_data,
            context: ContextData::from_context(context),
        };
        let mut custom_data = Map::new();
        custom_data.insert(
            "auth0".to_string(),
            serde_json::to_value(&custom).map_err(SdkError::Build)?,
        );

        let user_id = match &self.get_user_id {
            Some(get_user_id) => get_user_id(user, context),
            None => user.user_id.clone(),
        };

        let mut login = LoginRecord::new(user_id);
        login.used_remember_me = Some(false);
        login.authentication_type = authentication_type(user, context);
        login.password_update_time = user.last_password_reset;

        let event_id = context
            .query_param(EVENT_ID_PARAM)
            .unwrap_or(context.session_id.as_str());

        Ok(DecisionInput::new(event_id, &context.request.ip, login).with_custom(custom_data))
    }
}

/// Builder for [`Auth0`]
pub struct Auth0Builder {
    inner: LoginClientBuilder,
    get_user_id: Option<UserIdGetter>,
}

impl Auth0Builder {
    pub fn new(config: LoginConfig) -> Self {
        Self {
            inner: LoginClientBuilder::new(config),
            get_user_id: None,
        }
    }

    /// Replace the default logger; `log_level` is then ignored
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.inner = self.inner.with_logger(logger);
        self
    }

    /// Replace the default reqwest transport
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.inner = self.inner.with_transport(transport);
        self
    }

    /// Derive `login.userId` from the rule inputs instead of `user.user_id`
    pub fn with_user_id_getter<F>(mut self, get_user_id: F) -> Self
    where
        F: Fn(&User, &Context) -> String + Send + Sync + 'static,
    {
        self.get_user_id = Some(Arc::new(get_user_id));
        self
    }

    pub fn build(self) -> Result<Auth0> {
        Ok(Auth0 {
            base: self.inner.build()?,
            get_user_id: self.get_user_id,
        })
    }
}
