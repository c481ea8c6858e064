//! Errors reported to the user from the add-on callbacks.
//!
//! None of these are fatal: each one becomes a prefixed error line in the
//! core buffer and the callback still returns a status to the host.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpenError {
    #[error("no handler for opening buffer {0}")]
    Unhandled(String),

    #[error("no known closed buffers")]
    EmptyHistory,

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("unknown option {0}")]
    UnknownOption(String),

    #[error("unknown layout {0}")]
    UnknownLayout(String),
}
