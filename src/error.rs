//! Error type shared by every entry point of the crate.
//!
//! All failures are caller errors detected before any arithmetic runs, so a
//! single [`FilterError::InvalidArgument`] kind covers them. The offending
//! argument is named so callers can report it.
use thiserror::Error;

/// Errors raised while validating filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// An argument violated a precondition.
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument (`a`, `b`, `si`, ...).
        arg: &'static str,
        /// Human readable reason.
        reason: String,
    },
}

impl FilterError {
    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { arg, reason: reason.into() }
    }

    /// Name of the argument that caused the failure.
    pub fn arg(&self) -> &'static str {
        match self {
            Self::InvalidArgument { arg, .. } => arg,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FilterError>;
