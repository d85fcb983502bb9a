//! Errors raised by the query side of the engine.

use thiserror::Error;

/// A query parameter was rejected before any work was done.
///
/// Nothing is clamped or guessed: a bad limit or a malformed criteria value
/// is reported to the caller as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl QueryError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
