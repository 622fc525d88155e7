use lambda_runtime::{Context, LambdaEvent};
use serde_json::Value;

pub const TEST_FUNCTION_NAME: &str = "hello-service-test";

/// Builds a Lambda context for tests with the given request id.
pub fn test_context(request_id: &str) -> Context {
    let mut context = Context::default();
    context.request_id = request_id.to_string();
    context.invoked_function_arn = format!(
        "arn:aws:lambda:eu-west-2:123456789012:function:{}",
        TEST_FUNCTION_NAME
    );
    context
}

/// Wraps a JSON payload in a `LambdaEvent`, as the runtime would deliver it.
pub fn test_event(payload: Value, request_id: &str) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, test_context(request_id))
}
