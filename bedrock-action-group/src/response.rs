//! Output types for action group invocations.
//!
//! A successful invocation returns the envelope Bedrock expects:
//!
//! ```json
//! {
//!   "response": {
//!     "actionGroup": "action-group",
//!     "function": "do-some-action",
//!     "functionResponse": { "responseBody": { "TEXT": { "body": "Hello Ada!" } } }
//!   },
//!   "messageVersion": "1.0"
//! }
//! ```
//!
//! A routing failure returns only `{"error": "..."}`.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorPayload, RoutingError};

/// Result of handling one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionGroupResponse {
    /// The action ran and produced a body
    Success(FunctionInvocationResponse),
    /// The request named an unknown action group or function
    Error(ErrorPayload),
}

impl ActionGroupResponse {
    /// Builds a success response carrying a text body.
    ///
    /// The routing fields and message version are copied verbatim.
    pub fn text(
        action_group: impl Into<String>,
        function: impl Into<String>,
        body: impl Into<String>,
        message_version: impl Into<String>,
    ) -> Self {
        Self::Success(FunctionInvocationResponse {
            response: FunctionResponse {
                action_group: action_group.into(),
                function: function.into(),
                function_response: FunctionResponseBody {
                    response_body: ResponseBody {
                        text: TextBody { body: body.into() },
                    },
                },
            },
            message_version: message_version.into(),
        })
    }

    /// Builds the structured error response for a routing failure.
    pub fn routing_error(error: &RoutingError) -> Self {
        Self::Error(ErrorPayload::from(error))
    }

    /// Returns true if this is a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the text body of a success response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success(success) => Some(&success.response.function_response.response_body.text.body),
            Self::Error(_) => None,
        }
    }

    /// Returns the message of an error response.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(payload) => Some(&payload.error),
        }
    }
}

/// Success envelope returned to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInvocationResponse {
    pub response: FunctionResponse,
    /// Echo of the request's message version
    pub message_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    /// Echo of the request's action group
    pub action_group: String,
    /// Echo of the request's function
    pub function: String,
    pub function_response: FunctionResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponseBody {
    pub response_body: ResponseBody,
}

/// Response body keyed by content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub body: String,
}
