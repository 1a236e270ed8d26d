use std::env;

use lambda_runtime::{service_fn, Error};
use nba_report_lambda_rust::handler::{handler, run, Request};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        return lambda_runtime::run(service_fn(handler)).await;
    }

    // Local one-shot run: optional request payload as JSON in the first argument.
    let request: Request = match env::args().nth(1) {
        Some(payload) => serde_json::from_str(&payload)?,
        None => Request::default(),
    };
    let response = run(request).await?;
    info!(message = %response.message, "Local run finished");
    Ok(())
}
