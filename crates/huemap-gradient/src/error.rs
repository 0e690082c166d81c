//! Gradient error types.

use thiserror::Error;

/// Result type for gradient operations.
pub type GradientResult<T> = Result<T, GradientError>;

/// Errors that can occur while building, sampling or loading gradients.
#[derive(Debug, Error)]
pub enum GradientError {
    /// Invalid argument (empty gradient, zero sample count, bad segment).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Parse error when loading gradient files.
    #[error("parse error at line {line}: {msg}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        msg: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] huemap_core::Error),
}

impl GradientError {
    /// Creates a [`GradientError::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a [`GradientError::Parse`] error.
    #[inline]
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }

    /// Returns `true` for caller argument errors.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument(_) => true,
            Self::Core(e) => e.is_invalid_argument(),
            _ => false,
        }
    }
}

impl From<GradientError> for huemap_core::Error {
    fn from(err: GradientError) -> Self {
        match err {
            GradientError::Core(e) => e,
            GradientError::Io(e) => huemap_core::Error::Io(e),
            other => huemap_core::Error::invalid_argument(other.to_string()),
        }
    }
}
