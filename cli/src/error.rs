use std::fmt;

use todo_client::{ApiError, TransportError};

/// Anything a subcommand can fail with, rendered as one stderr line.
#[derive(Debug)]
pub(crate) enum CliError {
    /// The title given to `add` was empty or whitespace.
    EmptyTitle,
    Api(ApiError),
    Transport(TransportError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::EmptyTitle => write!(f, "todo title must not be empty"),
            CliError::Api(e) => write!(f, "{e}"),
            CliError::Transport(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        CliError::Api(e)
    }
}

impl From<TransportError> for CliError {
    fn from(e: TransportError) -> Self {
        CliError::Transport(e)
    }
}
