use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Encoded JSON is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
