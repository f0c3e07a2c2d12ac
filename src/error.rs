//! Error types for gitpatch.
//!
//! Parse failures of individual patches are not errors: they surface as
//! `None` entries in the parse result. `PatchError` is reserved for contract
//! violations and for failures of the command-line front end.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gitpatch operations.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The caller handed over input that is not text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bad arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading input or writing output failed.
    #[error("I/O failed: {0}")]
    Io(String),

    /// The input contained no patch-start marker.
    #[error("No patch found in {0}")]
    NoPatch(String),

    /// Strict mode: some patches could not be parsed.
    #[error("{0} of {1} patches could not be parsed")]
    ParseFailure(usize, usize),
}

impl PatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchError::InvalidInput(_) => exit_codes::USER_ERROR,
            PatchError::UserError(_) => exit_codes::USER_ERROR,
            PatchError::Io(_) => exit_codes::IO_FAILURE,
            PatchError::NoPatch(_) => exit_codes::NO_PATCH,
            PatchError::ParseFailure(..) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for gitpatch operations.
pub type Result<T> = std::result::Result<T, PatchError>;
