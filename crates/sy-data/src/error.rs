use sy_state::StateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset is empty")]
    Empty,

    #[error("required column {0:?} not found in header")]
    MissingColumn(String),

        #[error("row {row}: {message}")]
    Parse { row: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("table integrity error: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    pub(crate) fn parse(row: u64, message: impl Into<String>) -> Self {
        DataError::Parse { row, message: message.into() }
    }
}

pub type DataResult<T> = Result<T, DataError>;
