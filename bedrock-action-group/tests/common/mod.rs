//! Shared test utilities for integration tests.
//!
//! Provides a recording log sink, event builders, and proptest strategies
//! used across the integration test files.

#![allow(dead_code)] // Not every test file uses every helper

use std::sync::{Arc, Mutex};

use bedrock_action_group::{ActionGroupEvent, LogLevel, Logger, Parameter};
use proptest::prelude::*;

pub const TEST_MESSAGE_VERSION: &str = "1.0";
pub const TEST_ACTION_GROUP: &str = "action-group";
pub const TEST_FUNCTION: &str = "do-some-action";

// =============================================================================
// Recording Logger
// =============================================================================

/// A log sink that keeps every record for later assertions.
///
/// Clones share the same record buffer, so a clone can be handed to the
/// dispatcher while the test keeps the original.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .map(|record| record.message)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records.lock().unwrap().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

// =============================================================================
// Event Builders
// =============================================================================

/// An event for the served action with the given parameters.
pub fn greeting_event(parameters: Vec<Parameter>) -> ActionGroupEvent {
    ActionGroupEvent::new(TEST_MESSAGE_VERSION, "agent-1", TEST_ACTION_GROUP, TEST_FUNCTION)
        .with_parameters(parameters)
}

/// A realistic Bedrock payload as raw JSON.
pub fn bedrock_payload(action_group: &str, function: &str, parameters: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "messageVersion": TEST_MESSAGE_VERSION,
        "agent": {
            "name": "starter-agent",
            "id": "AGENT12345",
            "alias": "TSTALIASID",
            "version": "DRAFT"
        },
        "inputText": "Please greet me",
        "sessionId": "111122223333444",
        "actionGroup": action_group,
        "function": function,
        "parameters": parameters,
        "sessionAttributes": {},
        "promptSessionAttributes": {}
    })
}

// =============================================================================
// Proptest Strategies
// =============================================================================

/// Parameter names drawn from a small alphabet so duplicates are common.
pub fn parameter_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("first_name".to_string()),
        Just("last_name".to_string()),
        "[a-c]{1,2}",
    ]
}

/// A parameter with possibly-absent name and value.
pub fn parameter_strategy() -> impl Strategy<Value = Parameter> {
    (
        proptest::option::of(parameter_name_strategy()),
        proptest::option::of("\\PC{0,10}"),
    )
        .prop_map(|(name, value)| Parameter::from_parts(name, value))
}

pub fn parameters_strategy() -> impl Strategy<Value = Vec<Parameter>> {
    proptest::collection::vec(parameter_strategy(), 0..12)
}
