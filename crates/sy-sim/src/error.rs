use sy_agent::AgentError;
use sy_core::TwinError;
use sy_events::EventError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] TwinError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("event rejected: {0}")]
    Event(#[from] EventError),
}

pub type SimResult<T> = Result<T, SimError>;
