//! Request dispatcher.
//!
//! The [`Dispatcher`] takes one [`ActionGroupEvent`] through the fixed
//! pipeline: log the caller and the request, resolve the routing fields,
//! normalize the parameters, run the action's handler, and build the
//! response envelope.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::action::Action;
use crate::config::HandlerConfig;
use crate::error::ActionGroupError;
use crate::event::ActionGroupEvent;
use crate::handler::{default_handler, ActionHandler};
use crate::logger::{Logger, TracingLogger};
use crate::params::ParamMap;
use crate::response::ActionGroupResponse;

/// Routes action group requests to their handlers.
///
/// Built once per cold start and shared by reference across invocations.
/// Handling is synchronous and does not mutate the dispatcher.
///
/// # Example
///
/// ```rust
/// use bedrock_action_group::{ActionGroupEvent, Dispatcher, HandlerConfig, NoopLogger, Parameter};
///
/// let dispatcher = Dispatcher::new(HandlerConfig::default()).with_logger(NoopLogger);
/// let event = ActionGroupEvent::new("1.0", "agent-1", "action-group", "do-some-action")
///     .with_parameters(vec![Parameter::new("first_name", "Ada")]);
///
/// let response = dispatcher.handle(&event).unwrap();
/// assert_eq!(response.body(), Some("Hello Ada!"));
/// ```
pub struct Dispatcher {
    handlers: HashMap<Action, Arc<dyn ActionHandler>>,
    logger: Arc<dyn Logger>,
    config: HandlerConfig,
}

impl Dispatcher {
    /// Creates a dispatcher with the built-in handler for every action and
    /// a [`TracingLogger`].
    pub fn new(config: HandlerConfig) -> Self {
        let handlers = Action::ALL
            .iter()
            .map(|action| (*action, default_handler(*action)))
            .collect();
        Self {
            handlers,
            logger: Arc::new(TracingLogger),
            config,
        }
    }

    /// Replaces the log sink.
    pub fn with_logger(self, logger: impl Logger + 'static) -> Self {
        self.with_shared_logger(Arc::new(logger))
    }

    /// Replaces the log sink with one that is shared with the caller.
    pub fn with_shared_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replaces the handler serving `action`.
    pub fn with_handler(mut self, action: Action, handler: impl ActionHandler + 'static) -> Self {
        self.handlers.insert(action, Arc::new(handler));
        self
    }

    /// Removes the handler serving `action`.
    ///
    /// A request routed to an action without a handler fails with
    /// [`ActionGroupError::InvariantViolation`].
    pub fn without_handler(mut self, action: Action) -> Self {
        self.handlers.remove(&action);
        self
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Handles one invocation.
    ///
    /// Unknown action groups and functions produce an
    /// [`ActionGroupResponse::Error`]; only a recognized action that yields
    /// no body returns `Err`.
    pub fn handle(&self, event: &ActionGroupEvent) -> Result<ActionGroupResponse, ActionGroupError> {
        self.logger
            .info(&format!("Invoked by agent: {}", event.agent_label()));
        if self.config.log_payloads {
            self.logger.info(&format!("Received event: {}", wire_dump(event)));
        }

        let action = match Action::resolve(&event.action_group, &event.function) {
            Ok(action) => action,
            Err(routing) => {
                self.logger.debug(&format!(
                    "Rejecting {}/{}: {}",
                    event.action_group, event.function, routing
                ));
                return Ok(ActionGroupResponse::routing_error(&routing));
            }
        };

        let params = ParamMap::from_parameters(&event.parameters);

        let missing = action.definition().missing_required(&params).join(", ");
        if !missing.is_empty() {
            self.logger.warn(&format!(
                "Missing required parameters for {}: {}",
                action, missing
            ));
        }

        let body = self
            .handlers
            .get(&action)
            .and_then(|handler| handler.handle(&params))
            .ok_or_else(|| ActionGroupError::invariant_violation(&event.action_group, &event.function))?;

        let response = ActionGroupResponse::text(
            &event.action_group,
            &event.function,
            body,
            &event.message_version,
        );

        if self.config.log_payloads {
            self.logger.info(&format!("Sending response: {}", wire_dump(&response)));
        }

        Ok(response)
    }
}

/// Pretty JSON with the wire field names, or the `Debug` form if the value
/// cannot be serialized.
fn wire_dump<T: Serialize + std::fmt::Debug>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:#?}", value))
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(HandlerConfig::default())
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("actions", &self.handlers.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Parameter;
    use crate::logger::{custom_logger, LogLevel, NoopLogger};
    use std::sync::Mutex;

    fn dispatcher() -> Dispatcher {
        Dispatcher::default().with_logger(NoopLogger)
    }

    fn event(action_group: &str, function: &str) -> ActionGroupEvent {
        ActionGroupEvent::new("1.0", "agent-1", action_group, function)
    }

    #[test]
    fn test_greets_first_name() {
        let event = event("action-group", "do-some-action")
            .with_parameters(vec![Parameter::new("first_name", "Ada")]);

        let response = dispatcher().handle(&event).unwrap();
        assert_eq!(
            response,
            ActionGroupResponse::text("action-group", "do-some-action", "Hello Ada!", "1.0")
        );
    }

    #[test]
    fn test_absent_first_name_renders_empty() {
        let response = dispatcher()
            .handle(&event("action-group", "do-some-action"))
            .unwrap();
        assert_eq!(response.body(), Some("Hello !"));
    }

    #[test]
    fn test_ignores_last_name() {
        let event = event("action-group", "do-some-action").with_parameters(vec![
            Parameter::new("first_name", "Ada"),
            Parameter::new("last_name", "Lovelace"),
        ]);
        assert_eq!(dispatcher().handle(&event).unwrap().body(), Some("Hello Ada!"));
    }

    #[test]
    fn test_unknown_action_group() {
        let response = dispatcher()
            .handle(&event("not-a-group", "do-some-action"))
            .unwrap();
        assert_eq!(response.error_message(), Some("Unknown actionGroup"));
    }

    #[test]
    fn test_unknown_function() {
        let response = dispatcher()
            .handle(&event("action-group", "not-a-function"))
            .unwrap();
        assert_eq!(response.error_message(), Some("Unknown function"));
    }

    #[test]
    fn test_handler_without_body_is_invariant_violation() {
        let dispatcher = dispatcher().with_handler(Action::DoSomeAction, |_: &ParamMap| -> Option<String> { None });

        let err = dispatcher
            .handle(&event("action-group", "do-some-action"))
            .unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_missing_handler_is_invariant_violation() {
        let dispatcher = dispatcher().without_handler(Action::DoSomeAction);

        let err = dispatcher
            .handle(&event("action-group", "do-some-action"))
            .unwrap_err();
        assert!(matches!(
            err,
            ActionGroupError::InvariantViolation { ref action_group, ref function }
                if action_group == "action-group" && function == "do-some-action"
        ));
    }

    #[test]
    fn test_custom_handler_replaces_default() {
        let dispatcher = dispatcher().with_handler(Action::DoSomeAction, |params: &ParamMap| {
            params.get("last_name").map(|name| format!("Goodbye {}!", name))
        });
        let event = event("action-group", "do-some-action")
            .with_parameters(vec![Parameter::new("last_name", "Lovelace")]);

        assert_eq!(dispatcher.handle(&event).unwrap().body(), Some("Goodbye Lovelace!"));
    }

    #[test]
    fn test_log_records() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&records);
        let dispatcher = Dispatcher::default().with_logger(custom_logger(move |level, message: &str| {
            captured.lock().unwrap().push((level, message.to_string()));
        }));
        let event = event("action-group", "do-some-action")
            .with_parameters(vec![Parameter::new("first_name", "Ada")]);

        dispatcher.handle(&event).unwrap();

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|(level, _)| *level == LogLevel::Info));
        assert_eq!(records[0].1, "Invoked by agent: agent-1");
        assert!(records[1].1.starts_with("Received event: "));
        assert!(records[1].1.contains("do-some-action"));
        assert!(records[2].1.starts_with("Sending response: "));
        assert!(records[2].1.contains("Hello Ada!"));
    }

    #[test]
    fn test_payload_dumps_use_wire_field_names() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&records);
        let dispatcher = Dispatcher::default().with_logger(custom_logger(move |_level, message: &str| {
            captured.lock().unwrap().push(message.to_string());
        }));
        let event = ActionGroupEvent::new("1.0", serde_json::json!({"alias": "TSTALIASID"}), "action-group", "do-some-action")
            .with_parameters(vec![Parameter::new("first_name", "Ada")]);

        dispatcher.handle(&event).unwrap();

        let records = records.lock().unwrap();
        let received = &records[1];
        assert!(received.contains("\"messageVersion\": \"1.0\""));
        assert!(received.contains("\"actionGroup\": \"action-group\""));
        assert!(received.contains("\"alias\": \"TSTALIASID\""));
        assert!(!received.contains("ActionGroupEvent"));
        assert!(!received.contains("message_version"));

        let sent = &records[2];
        assert!(sent.contains("\"functionResponse\""));
        assert!(sent.contains("\"TEXT\""));
        assert!(!sent.contains("Success("));
        assert!(!sent.contains("FunctionInvocationResponse"));
    }

    #[test]
    fn test_wire_dump_is_parseable_json() {
        let response = ActionGroupResponse::text("action-group", "do-some-action", "Hello Ada!", "1.0");
        let dump = wire_dump(&response);
        let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(value["messageVersion"], "1.0");
    }

    #[test]
    fn test_payload_logging_disabled() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&records);
        let dispatcher = Dispatcher::new(HandlerConfig::new().with_log_payloads(false)).with_logger(
            custom_logger(move |_level, message: &str| {
                captured.lock().unwrap().push(message.to_string());
            }),
        );
        let event = event("action-group", "do-some-action")
            .with_parameters(vec![Parameter::new("first_name", "Ada")]);

        dispatcher.handle(&event).unwrap();

        assert_eq!(*records.lock().unwrap(), vec!["Invoked by agent: agent-1".to_string()]);
    }

    #[test]
    fn test_missing_required_parameter_warns() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&records);
        let dispatcher = Dispatcher::default().with_logger(custom_logger(move |level, message: &str| {
            captured.lock().unwrap().push((level, message.to_string()));
        }));

        let response = dispatcher
            .handle(&event("action-group", "do-some-action"))
            .unwrap();
        assert_eq!(response.body(), Some("Hello !"));

        let records = records.lock().unwrap();
        let warnings: Vec<_> = records
            .iter()
            .filter(|(level, _)| *level == LogLevel::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].1,
            "Missing required parameters for action-group/do-some-action: first_name"
        );
    }
}
