use thiserror::Error;

/// Errors that can occur while publishing an event.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The broker rejected the message or is unreachable.
    #[error("broker error: {0}")]
    Broker(String),

    /// The event payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for publishing operations.
pub type Result<T> = std::result::Result<T, PublishError>;
