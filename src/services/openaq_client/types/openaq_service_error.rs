use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAqServiceError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to get response body: {0}")]
    Body(String),
}
