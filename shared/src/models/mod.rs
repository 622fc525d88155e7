pub mod encoding;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Proxy-style response record handed back to the Lambda runtime.
///
/// Field order is the serialized key order: `statusCode`, `headers`, `body`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String, // Serialized JSON, not a nested object
}

impl ApiResponse {
    /// Builds a response whose body is `payload` encoded the way Python's
    /// `json.dumps` encodes it, with a JSON content type header.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self> {
        let body = encoding::to_python_json_string(payload)?;
        tracing::trace!("Encoded response body: {} bytes", body.len());

        let mut headers = HashMap::with_capacity(1);
        headers.insert(CONTENT_TYPE_HEADER.to_string(), APPLICATION_JSON.to_string());

        Ok(Self {
            status_code,
            headers,
            body,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HelloMessage {
    pub message: String,
}

impl HelloMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
