//! Error types for huemap-core operations.
//!
//! Every failure in the hue mapping pipeline is a validation failure detected
//! before any pixel is touched. The per-pixel math itself cannot fail.
//!
//! # Usage
//!
//! ```rust
//! use huemap_core::{Error, Result};
//!
//! fn check_bpp(bpp: u32) -> Result<()> {
//!     if bpp != 3 && bpp != 4 {
//!         return Err(Error::invalid_layout(bpp));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_bpp(2).unwrap_err().is_invalid_argument());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or processing pixel buffers.
///
/// # Categories
///
/// - **Argument errors**: [`InvalidArgument`](Error::InvalidArgument),
///   [`InvalidLayout`](Error::InvalidLayout),
///   [`InvalidDimensions`](Error::InvalidDimensions),
///   [`BufferSize`](Error::BufferSize)
/// - **Control flow**: [`Cancelled`](Error::Cancelled)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// Generic invalid argument (sample count, empty table, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bytes-per-pixel value other than 3 (RGB) or 4 (RGBA).
    #[error("unsupported bytes per pixel: {bytes_per_pixel} (expected 3 or 4)")]
    InvalidLayout {
        /// Bytes per pixel that was requested
        bytes_per_pixel: u32,
    },

    /// Image dimensions that cannot be addressed.
    ///
    /// Returned when `width * height * bytes_per_pixel` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer length does not match the declared dimensions.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSize {
        /// Bytes implied by width, height and layout
        expected: usize,
        /// Bytes actually supplied
        got: usize,
    },

    /// The operation was cancelled between rows.
    #[error("operation cancelled")]
    Cancelled,

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::InvalidLayout`] error.
    #[inline]
    pub fn invalid_layout(bytes_per_pixel: u32) -> Self {
        Self::InvalidLayout { bytes_per_pixel }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(expected: usize, got: usize) -> Self {
        Self::BufferSize { expected, got }
    }

    /// Returns `true` for every variant caused by a bad caller argument.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::InvalidLayout { .. }
                | Self::InvalidDimensions { .. }
                | Self::BufferSize { .. }
        )
    }

    /// Returns `true` if the operation was cancelled.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
