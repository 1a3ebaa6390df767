//! # Bedrock Agent Action Group Handler
//!
//! An AWS Lambda function that serves an Amazon Bedrock agent action group.
//! The agent invokes the function with the action group and function it
//! chose plus a flat list of parameters; the handler routes the call, runs
//! the matching action, and answers with the response envelope Bedrock
//! expects.
//!
//! ## Request Flow
//!
//! 1. The runtime deserializes an [`ActionGroupEvent`].
//! 2. The [`Dispatcher`] logs the caller and the request.
//! 3. [`Action::resolve`] matches `actionGroup`, then `function`. Unknown
//!    values produce `{"error": "Unknown actionGroup"}` or
//!    `{"error": "Unknown function"}`.
//! 4. The parameter list is normalized into a [`ParamMap`] (nameless
//!    entries dropped, last duplicate wins).
//! 5. The action's [`ActionHandler`] computes the body and the dispatcher
//!    wraps it in an [`ActionGroupResponse`].
//!
//! ## Served Actions
//!
//! | Action group   | Function         | Body                    |
//! |----------------|------------------|-------------------------|
//! | `action-group` | `do-some-action` | `Hello {first_name}!`   |
//!
//! A missing or null `first_name` renders as the empty string, giving
//! `Hello !`.
//!
//! ## Example
//!
//! ```rust
//! use bedrock_action_group::{ActionGroupEvent, Dispatcher, NoopLogger};
//!
//! let dispatcher = Dispatcher::default().with_logger(NoopLogger);
//! let event: ActionGroupEvent = serde_json::from_str(r#"{
//!     "messageVersion": "1.0",
//!     "agent": {"name": "starter", "id": "A1", "alias": "TSTALIASID", "version": "DRAFT"},
//!     "actionGroup": "action-group",
//!     "function": "do-some-action",
//!     "parameters": [{"name": "first_name", "type": "string", "value": "Ada"}]
//! }"#).unwrap();
//!
//! let response = dispatcher.handle(&event).unwrap();
//! assert_eq!(response.body(), Some("Hello Ada!"));
//! ```

pub mod action;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod handler;
pub mod lambda;
pub mod logger;
pub mod params;
pub mod response;
pub mod schema;

pub use action::{Action, ActionGroup, FIRST_NAME, LAST_NAME};
pub use config::HandlerConfig;
pub use dispatch::Dispatcher;
pub use error::{ActionGroupError, ErrorPayload, RoutingError};
pub use event::{ActionGroupEvent, Parameter};
pub use handler::{greeting, ActionHandler, GreetingHandler};
pub use lambda::function_handler;
pub use logger::{custom_logger, CustomLogger, LogLevel, Logger, NoopLogger, TracingLogger};
pub use params::ParamMap;
pub use response::ActionGroupResponse;
pub use schema::{ActionGroupDefinition, FunctionDefinition, FunctionSchema, ParameterDetail, ParameterType};
