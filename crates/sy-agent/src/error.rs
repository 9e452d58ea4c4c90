use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("unknown agent kind {0:?}")]
    UnknownKind(String),

    #[error("agent configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
