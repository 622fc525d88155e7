use lambda_runtime::{service_fn, Error};
use tracing::info;

mod config;
mod handlers;

#[cfg(test)]
mod tests;

use config::RuntimeInfo;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter())
        .with_ansi(false) // Disable ANSI colors in Lambda environment
        .with_target(true)
        .init();

    let runtime_info = RuntimeInfo::from_env();
    if runtime_info.is_lambda() {
        info!(
            "Starting AWS Lambda function: {} (version: {})",
            runtime_info.function_name.as_deref().unwrap_or_default(),
            runtime_info.function_version
        );
    } else {
        info!("Starting hello service in non-Lambda environment");
    }

    // Run the Lambda service function
    lambda_runtime::run(service_fn(handlers::handler)).await?;
    Ok(())
}
