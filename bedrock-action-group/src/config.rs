//! Handler configuration.
//!
//! Configuration is read from the environment once per cold start:
//!
//! | Variable                    | Meaning                                  | Default |
//! |-----------------------------|------------------------------------------|---------|
//! | `AWS_LAMBDA_LOG_LEVEL`      | Maximum level emitted by the subscriber  | `INFO`  |
//! | `ACTION_GROUP_LOG_PAYLOADS` | Log full request and response dumps      | `true`  |
//!
//! `AWS_LAMBDA_LOG_LEVEL` is the variable Lambda sets from the function's
//! advanced logging controls.

use crate::error::ActionGroupError;
use crate::logger::LogLevel;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "AWS_LAMBDA_LOG_LEVEL";

/// Environment variable toggling request/response dumps.
pub const LOG_PAYLOADS_ENV: &str = "ACTION_GROUP_LOG_PAYLOADS";

/// Settings for the dispatcher and its logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Maximum level emitted by the tracing subscriber
    pub log_level: LogLevel,
    /// Whether the full request and response are logged
    pub log_payloads: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_payloads: true,
        }
    }
}

impl HandlerConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Enables or disables request/response dumps.
    pub fn with_log_payloads(mut self, log_payloads: bool) -> Self {
        self.log_payloads = log_payloads;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ActionGroupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// Unset and empty variables keep their defaults; malformed values are
    /// rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ActionGroupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(LOG_LEVEL_ENV)) {
            config.log_level = raw
                .parse()
                .map_err(|e| ActionGroupError::config(format!("{}: {}", LOG_LEVEL_ENV, e)))?;
        }

        if let Some(raw) = non_empty(lookup(LOG_PAYLOADS_ENV)) {
            config.log_payloads = parse_bool(&raw).ok_or_else(|| {
                ActionGroupError::config(format!(
                    "{}: expected a boolean, got '{}'",
                    LOG_PAYLOADS_ENV, raw
                ))
            })?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
