use thiserror::Error;

pub type Result<T> = std::result::Result<T, PublisherError>;

#[derive(Debug, Error)]
pub enum PublisherError {
    #[error("failed to build message body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("publish call failed: {0}")]
    Publish(String),
}
