//! Error Types
//!
//! All fallible operations in this crate return [`Result`] with one of two
//! error kinds:
//!
//! - **`InvalidArgument`**: a caller-supplied value was out of range, or the
//!   server sent data that violates the wire contract (malformed TSV line,
//!   unknown tag digit, unexpected HTTP status code).
//! - **`Transport`**: the network round trip itself failed (connect, send,
//!   or read). Wraps the underlying `reqwest` error.
//!
//! Neither kind is ever coerced to a default value; a decode or transport
//! problem is always surfaced to the caller as a terminal outcome of that
//! single call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A parameter or wire value was outside its documented range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request could not be sent or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Shorthand used throughout the decoder and validators.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
