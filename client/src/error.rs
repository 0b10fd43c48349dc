//! Error taxonomy for building and parsing API exchanges.
//!
//! Every non-200 response lands in `UnexpectedStatus` with the raw status
//! and body attached: the contract treats all of them as step failures and
//! the report surfaces both values verbatim, so no status code earns a
//! dedicated variant.

use std::fmt;

/// Errors returned by `TodoApi` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a status other than 200.
    UnexpectedStatus { status: u16, body: String },

    /// The request payload could not be encoded as JSON.
    Encode(String),

    /// A 200 response carried a body that does not decode into the
    /// expected type.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            ApiError::Encode(msg) => write!(f, "request encoding failed: {msg}"),
            ApiError::Decode(msg) => write!(f, "response decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
