//! Lambda entry point for the action group handler.
//!
//! Build with `cargo lambda build --release` and attach the function to the
//! agent's action group as its executor.

use bedrock_action_group::{function_handler, Dispatcher, HandlerConfig};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level.as_tracing_level())
        .with_target(false)
        .without_time()
        .init();

    let dispatcher = Dispatcher::new(config);
    tracing::debug!(?dispatcher, "dispatcher ready");

    let dispatcher = &dispatcher;
    lambda_runtime::run(service_fn(move |event| async move {
        function_handler(dispatcher, event).await
    }))
    .await
}
