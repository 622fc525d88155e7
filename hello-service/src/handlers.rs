use hello_shared::error::Result as ServiceResult;
use hello_shared::models::{ApiResponse, HelloMessage};
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

pub const HELLO_MESSAGE: &str = "Hello from AWS Lambda Python function!";

// Lambda handler function - public for testing
pub async fn handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    info!("Received invocation: request_id={}", event.context.request_id);

    let response = handle(&event.payload, &event.context)?;

    info!(
        "Returning response: request_id={}, status={}",
        event.context.request_id, response.status_code
    );
    Ok(response)
}

/// Builds the hello response. The event and context are accepted to match the
/// runtime's calling convention and do not affect the result.
pub fn handle(_event: &Value, context: &Context) -> ServiceResult<ApiResponse> {
    debug!(
        "Building hello response: request_id={}, function_arn={}",
        context.request_id, context.invoked_function_arn
    );

    ApiResponse::json(200, &HelloMessage::new(HELLO_MESSAGE))
}
