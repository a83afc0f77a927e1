//! Pluggable leveled logger
//!
//! Clients log through an injected [`Logger`]. The default [`TracingLogger`]
//! gates messages by a minimum [`LogLevel`] and forwards the rest to
//! `tracing`, so the host decides where they end up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name prefixed to SDK log lines and error messages
pub const SDK_NAME: &str = "Precognitive";

/// Minimum level a logger emits. Each level enables itself and all levels
/// above it; `None` disables logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    /// Whether a logger configured at `self` emits messages at `level`
    pub fn enables(self, level: LogLevel) -> bool {
        level != LogLevel::None && self >= level
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

/// Leveled log sink used by the decision clients
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default logger: level-gated, emits through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    /// Create a logger that emits `level` and above
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Configured minimum level
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        if self.level.enables(LogLevel::Debug) {
            tracing::debug!(target: "decision_ai", sdk = SDK_NAME, "{}", message);
        }
    }

    fn info(&self, message: &str) {
        if self.level.enables(LogLevel::Info) {
            tracing::info!(target: "decision_ai", sdk = SDK_NAME, "{}", message);
        }
    }

    fn warn(&self, message: &str) {
        if self.level.enables(LogLevel::Warn) {
            tracing::warn!(target: "decision_ai", sdk = SDK_NAME, "{}", message);
        }
    }

    fn error(&self, message: &str) {
        if self.level.enables(LogLevel::Error) {
            tracing::error!(target: "decision_ai", sdk = SDK_NAME, "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn log_all(level: LogLevel) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger = TracingLogger::new(level);
            logger.debug("debug-message");
            logger.info("info-message");
            logger.warn("warn-message");
            logger.error("error-message");
        });

        captured.contents()
    }

    #[test]
    fn test_level_none_logs_nothing() {
        assert_eq!(log_all(LogLevel::None), "");
    }

    #[test]
    fn test_level_debug_logs_everything() {
        let output = log_all(LogLevel::Debug);
        for message in ["debug-message", "info-message", "warn-message", "error-message"] {
            assert!(output.contains(message), "missing {message} in {output}");
        }
        assert!(output.contains("Precognitive"));
    }

    #[test]
    fn test_level_warn_gates_lower_levels() {
        let output = log_all(LogLevel::Warn);
        assert!(!output.contains("debug-message"));
        assert!(!output.contains("info-message"));
        assert!(output.contains("warn-message"));
        assert!(output.contains("error-message"));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug.enables(LogLevel::Error));
        assert!(LogLevel::Info.enables(LogLevel::Info));
        assert!(!LogLevel::Error.enables(LogLevel::Warn));
        assert!(!LogLevel::None.enables(LogLevel::Error));
        assert!(!LogLevel::Debug.enables(LogLevel::None));
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("none".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert!("verbose".parse::<LogLevel>().is_err());

        let level: LogLevel = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(level, LogLevel::Info);
        assert_eq!(LogLevel::Info.to_string(), "INFO");
    }

    #[test]
    fn test_default_level_is_none() {
        assert_eq!(TracingLogger::default().level(), LogLevel::None);
    }
}
