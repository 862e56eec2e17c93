use std::io;

use thiserror::Error;

/// Library-wide error type for prodex operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Raw text could not be converted into the key domain of the active selector.
    #[error("cannot read '{value}' as {wanted}")]
    Parse { value: String, wanted: &'static str },

    /// A data-file line did not yield a valid record. Fatal for the whole load.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Unrecognized top-level command.
    #[error("invalid command '{0}'")]
    InvalidCommand(String),

    /// Unrecognized field name in an update or search request.
    #[error("unknown field '{0}': expected id, name, price, or category")]
    InvalidField(String),
}

impl AppError {
    pub(crate) fn parse<S: Into<String>>(value: S, wanted: &'static str) -> Self {
        AppError::Parse { value: value.into(), wanted }
    }
}
