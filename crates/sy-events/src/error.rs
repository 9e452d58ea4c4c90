use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("malformed event: {0}")]
    Malformed(String),

    #[error("invalid event time {0}")]
    InvalidTime(String),

    #[error("event {0:?} has no trigger time")]
    MissingTriggerTime(String),

    #[error("unknown event type {0:?}")]
    UnknownType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;
