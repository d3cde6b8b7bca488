use event_schema::EventError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LabelerError>;

#[derive(Debug, Error)]
pub enum LabelerError {
    /// Caller error: the invocation payload did not resolve to a
    /// (bucket, key) pair. Surfaced before any remote call.
    #[error("invalid invocation event: {0}")]
    Event(#[from] EventError),

    /// Caller error: direct invocations must name a credential profile.
    #[error("a credential profile is required when invoked directly")]
    MissingProfile,

    #[error("failed to render label output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("outbound HTTP POST failed: {0}")]
    Post(#[from] reqwest::Error),
}
