//! Action handlers.
//!
//! Each [`Action`] is served by an [`ActionHandler`] that turns the
//! normalized parameters into a response body. [`default_handler`] maps every
//! action to its built-in implementation.

use std::sync::Arc;

use crate::action::{Action, FIRST_NAME};
use crate::params::ParamMap;

/// Produces the response body for one action.
///
/// Returning `None` means no body was produced; the dispatcher treats this
/// as an invariant violation and fails the invocation.
pub trait ActionHandler: Send + Sync {
    fn handle(&self, params: &ParamMap) -> Option<String>;
}

impl<F> ActionHandler for F
where
    F: Fn(&ParamMap) -> Option<String> + Send + Sync,
{
    fn handle(&self, params: &ParamMap) -> Option<String> {
        self(params)
    }
}

/// Greets the user named by the `first_name` parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingHandler;

impl ActionHandler for GreetingHandler {
    fn handle(&self, params: &ParamMap) -> Option<String> {
        Some(greeting(params.get(FIRST_NAME)))
    }
}

/// Formats the greeting for a first name.
///
/// An absent first name renders as the empty string, so
/// `greeting(None)` is `"Hello !"`.
pub fn greeting(first_name: Option<&str>) -> String {
    format!("Hello {}!", first_name.unwrap_or_default())
}

/// The built-in handler for an action.
pub fn default_handler(action: Action) -> Arc<dyn ActionHandler> {
    match action {
        Action::DoSomeAction => Arc::new(GreetingHandler),
    }
}
