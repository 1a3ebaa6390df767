//! Function schema for the served action groups.
//!
//! These types describe each action group the way Bedrock's
//! `functionSchema` does, so the deployed agent configuration and the
//! handler share one definition. See [`crate::action`] for the values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::params::ParamMap;

/// Definition of an action group and the functions it exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupDefinition {
    pub action_group_name: String,
    pub description: String,
    pub action_group_state: ActionGroupState,
    pub function_schema: FunctionSchema,
}

/// Whether the agent may call the action group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionGroupState {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSchema {
    pub functions: Vec<FunctionDefinition>,
}

/// One function the agent can call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    /// Parameters keyed by name
    pub parameters: BTreeMap<String, ParameterDetail>,
}

impl FunctionDefinition {
    /// Creates a definition with no parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, detail: ParameterDetail) -> Self {
        self.parameters.insert(name.into(), detail);
        self
    }

    /// Names of required parameters that are absent or carry no value.
    pub fn missing_required(&self, params: &ParamMap) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|(name, detail)| detail.required && params.get(name).is_none())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Description of a single function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDetail {
    pub description: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
}

impl ParameterDetail {
    /// A required string parameter.
    pub fn required_string(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required: true,
            param_type: ParameterType::String,
        }
    }

    /// An optional string parameter.
    pub fn optional_string(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required: false,
            param_type: ParameterType::String,
        }
    }
}

/// Value types Bedrock supports for function parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
}
