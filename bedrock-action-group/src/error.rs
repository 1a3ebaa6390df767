//! Error types for the action group handler.
//!
//! Routing failures and fatal failures are separate types: a
//! [`RoutingError`] becomes a structured [`ErrorPayload`]
//! returned to the agent, while an [`ActionGroupError`] fails the Lambda
//! invocation and is reported by the runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request whose routing fields do not name a known action.
///
/// The `Display` output of each variant is the exact message placed in the
/// `error` field of the response payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// `actionGroup` is not one of the served action groups.
    #[error("Unknown actionGroup")]
    UnknownActionGroup {
        /// The action group named by the request
        action_group: String,
    },

    /// `actionGroup` is served but `function` is not part of it.
    #[error("Unknown function")]
    UnknownFunction {
        /// The action group named by the request
        action_group: String,
        /// The function named by the request
        function: String,
    },
}

impl RoutingError {
    /// Creates a new UnknownActionGroup error.
    pub fn unknown_action_group(action_group: impl Into<String>) -> Self {
        Self::UnknownActionGroup {
            action_group: action_group.into(),
        }
    }

    /// Creates a new UnknownFunction error.
    pub fn unknown_function(action_group: impl Into<String>, function: impl Into<String>) -> Self {
        Self::UnknownFunction {
            action_group: action_group.into(),
            function: function.into(),
        }
    }
}

/// Errors that fail the whole invocation.
#[derive(Debug, Error)]
pub enum ActionGroupError {
    /// A recognized action finished without producing a response body.
    #[error("No body was generated for {action_group}/{function}")]
    InvariantViolation {
        /// The action group being served
        action_group: String,
        /// The function being served
        function: String,
    },

    /// The handler configuration could not be read.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the bad setting
        message: String,
    },
}

impl ActionGroupError {
    /// Creates a new InvariantViolation error.
    pub fn invariant_violation(action_group: impl Into<String>, function: impl Into<String>) -> Self {
        Self::InvariantViolation {
            action_group: action_group.into(),
            function: function.into(),
        }
    }

    /// Creates a new Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this is an InvariantViolation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

/// Structured error body returned for routing failures.
///
/// Serializes as `{"error": "<message>"}` with no envelope fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorPayload {
    /// The routing failure message
    pub error: String,
}

impl ErrorPayload {
    /// Creates a new ErrorPayload.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&RoutingError> for ErrorPayload {
    fn from(error: &RoutingError) -> Self {
        Self::new(error.to_string())
    }
}

impl From<RoutingError> for ErrorPayload {
    fn from(error: RoutingError) -> Self {
        Self::from(&error)
    }
}
