//! Lambda runtime integration.
//!
//! [`function_handler`] adapts a [`LambdaEvent`] to the [`Dispatcher`]. The
//! binary wires it into `lambda_runtime::run`:
//!
//! ```rust,ignore
//! let dispatcher = Dispatcher::new(HandlerConfig::from_env()?);
//! lambda_runtime::run(service_fn(|event| function_handler(&dispatcher, event))).await
//! ```

use lambda_runtime::{Error, LambdaEvent};
use tracing::Instrument;

use crate::dispatch::Dispatcher;
use crate::event::ActionGroupEvent;
use crate::response::ActionGroupResponse;

/// Handles one Lambda invocation.
///
/// Routing failures are returned as a successful invocation carrying an
/// error payload. An [`ActionGroupError`](crate::ActionGroupError) fails the
/// invocation; the runtime reports it to Bedrock as a function error.
pub async fn function_handler(
    dispatcher: &Dispatcher,
    event: LambdaEvent<ActionGroupEvent>,
) -> Result<ActionGroupResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!(
        "action_group",
        request_id = %context.request_id,
        session_id = payload.session_id.as_deref().unwrap_or_default(),
    );

    async {
        match dispatcher.handle(&payload) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!(error = %e, "action group invocation failed");
                Err(Error::from(e))
            }
        }
    }
    .instrument(span)
    .await
}
