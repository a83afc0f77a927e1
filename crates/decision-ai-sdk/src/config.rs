//! Construction configuration for decision clients

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use decision_ai_core::{ApiVersion, LogLevel, Result, SdkError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Decision API base URL
pub const DEFAULT_API_URL: &str = "https://api.precognitive.io";

/// Request timeout used when neither the call nor the config sets one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Environment variable prefix read by [`LoginConfig::load`]
const ENV_PREFIX: &str = "DECISION_AI";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// API key injected into every request
    pub api_key: String,

    /// API version, selects the URL path segment
    #[serde(default)]
    pub version: ApiVersion,

    /// Basic auth credentials
    pub auth: BasicAuth,

    /// Level of the default logger; ignored when a logger is injected
    #[serde(default)]
    pub log_level: LogLevel,

    /// Default request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Base URL of the decision API
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Basic auth credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct BasicAuth {
    pub user_name: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    /// `Authorization` header value: `Basic base64(user:password)`
    pub fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.user_name, self.password);
        format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("user_name", &self.user_name)
            .field("password", &"***")
            .finish()
    }
}

impl LoginConfig {
    /// Create a configuration with the required fields
    pub fn new(
        api_key: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            version: ApiVersion::default(),
            auth: BasicAuth::new(user_name, password),
            log_level: LogLevel::default(),
            timeout_ms: None,
            api_url: default_api_url(),
        }
    }

    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Set the request timeout, rounded up to whole milliseconds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Default request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Login decision endpoint: `<api_url>/<version>/decision/login`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/decision/login",
            self.api_url.trim_end_matches('/'),
            self.version
        )
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(SdkError::Config("api_key is required".to_string()));
        }
        if self.timeout_ms == Some(0) {
            return Err(SdkError::Config("timeout_ms must be greater than zero".to_string()));
        }
        if self.api_url.trim().is_empty() {
            return Err(SdkError::Config("api_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load configuration from `.env`, an optional `config/decision-ai`
    /// file and `DECISION_AI_*` environment variables.
    ///
    /// Nested keys use `__`, e.g. `DECISION_AI_AUTH__USER_NAME`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_with_prefix(ENV_PREFIX)
    }

    fn load_with_prefix(prefix: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::with_name("config/decision-ai").required(false))
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to load configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| SdkError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let auth = BasicAuth::new("test", "test-pw");
        assert_eq!(auth.header_value(), "Basic dGVzdDp0ZXN0LXB3");
    }

    #[test]
    fn test_basic_auth_debug_hides_password() {
        let debug_str = format!("{:?}", BasicAuth::new("test", "test-pw"));
        assert!(debug_str.contains("test"));
        assert!(!debug_str.contains("test-pw"));
    }

    #[test]
    fn test_config_defaults() {
        let config = LoginConfig::new("key", "test", "test-pw");

        assert_eq!(config.version, ApiVersion::V1);
        assert_eq!(config.log_level, LogLevel::None);
        assert_eq!(config.timeout(), Duration::from_millis(5000));
        assert_eq!(config.endpoint(), "https://api.precognitive.io/v1/decision/login");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = LoginConfig::new("key", "test", "test-pw")
            .with_timeout(Duration::from_millis(250))
            .with_log_level(LogLevel::Debug)
            .with_api_url("http://127.0.0.1:9000/");

        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/v1/decision/login");
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let config = LoginConfig::new("  ", "test", "test-pw");
        assert!(matches!(config.validate(), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = LoginConfig::new("key", "test", "test-pw").with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_sub_millisecond_timeout_rounds_up() {
        let config =
            LoginConfig::new("key", "test", "test-pw").with_timeout(Duration::from_micros(500));
        assert_eq!(config.timeout_ms, Some(1));
        assert!(config.validate().is_ok());

        let config =
            LoginConfig::new("key", "test", "test-pw").with_timeout(Duration::from_micros(1500));
        assert_eq!(config.timeout_ms, Some(2));

        let config = LoginConfig::new("key", "test", "test-pw").with_timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, Some(u64::MAX));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: LoginConfig = serde_json::from_value(serde_json::json!({
            "api_key": "key",
            "auth": { "user_name": "test", "password": "test-pw" },
            "log_level": "warn"
        }))
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_load_from_environment() {
        std::env::set_var("DECISION_AI_LOAD_TEST_API_KEY", "env-key");
        std::env::set_var("DECISION_AI_LOAD_TEST_AUTH__USER_NAME", "env-user");
        std::env::set_var("DECISION_AI_LOAD_TEST_AUTH__PASSWORD", "env-pw");
        std::env::set_var("DECISION_AI_LOAD_TEST_LOG_LEVEL", "info");

        let config = LoginConfig::load_with_prefix("DECISION_AI_LOAD_TEST").unwrap();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.auth.user_name, "env-user");
        assert_eq!(config.auth.password, "env-pw");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_without_api_key_fails() {
        let result = LoginConfig::load_with_prefix("DECISION_AI_MISSING_TEST");
        assert!(matches!(result, Err(SdkError::Config(_))));
    }
}
