//! Input types for action group invocations.
//!
//! An Amazon Bedrock agent invokes the Lambda function with a JSON event
//! naming the action group, the function within it, and a flat list of
//! parameters. This module defines that event.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Input payload for an action group Lambda invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupEvent {
    /// Version of the event format, echoed back in the response
    pub message_version: String,

    /// The agent that made the call (any JSON value; only logged)
    pub agent: serde_json::Value,

    /// Name of the action group being invoked
    pub action_group: String,

    /// Name of the function within the action group
    pub function: String,

    /// Parameters for the function; missing and `null` both mean empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,

    /// The user input for the conversation turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,

    /// Identifier of the agent session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "HashMap::is_empty")]
    pub session_attributes: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "HashMap::is_empty")]
    pub prompt_session_attributes: HashMap<String, String>,
}

impl ActionGroupEvent {
    /// Creates an event with the routing fields set and everything else empty.
    pub fn new(
        message_version: impl Into<String>,
        agent: impl Into<serde_json::Value>,
        action_group: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            message_version: message_version.into(),
            agent: agent.into(),
            action_group: action_group.into(),
            function: function.into(),
            parameters: Vec::new(),
            input_text: None,
            session_id: None,
            session_attributes: HashMap::new(),
            prompt_session_attributes: HashMap::new(),
        }
    }

    /// Replaces the parameter list.
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the session identifier.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Human-readable form of the calling agent.
    ///
    /// String identifiers are shown bare; structured identifiers are shown
    /// as compact JSON.
    pub fn agent_label(&self) -> String {
        match &self.agent {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A single name/value parameter supplied with the invocation.
///
/// Either field may be absent; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    #[serde(default)]
    pub name: Option<String>,

    /// Declared parameter type (carried, not interpreted)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    /// Parameter value
    #[serde(default)]
    pub value: Option<String>,
}

impl Parameter {
    /// Creates a parameter with both name and value present.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            param_type: None,
            value: Some(value.into()),
        }
    }

    /// Creates a parameter from optional parts.
    pub fn from_parts(name: Option<String>, value: Option<String>) -> Self {
        Self {
            name,
            param_type: None,
            value,
        }
    }

    /// Sets the declared type.
    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = Some(param_type.into());
        self
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
