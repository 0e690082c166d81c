//! # huemap-core
//!
//! Core types for hue mapping.
//!
//! This crate provides the foundational types used throughout the huemap workspace:
//!
//! - [`Rgba`], [`Hsv`] - Normalized colors and the RGB <-> HSV conversion
//! - [`PixelLayout`] - Interleaved 8-bit RGB or RGBA pixels
//! - [`ImageView`] - Validated, borrowed source pixel buffer
//! - [`RgbaImage`] - Owned RGBA destination buffer
//! - [`Error`] - Validation errors shared by every crate
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other huemap crates depend on it:
//!
//! ```text
//! huemap-core (this crate)
//!    ^
//!    |
//!    +-- huemap-gradient (gradients, hue lookup table)
//!    +-- huemap-ops (hue remapping, flatten)
//!    +-- huemap-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod color;
pub mod error;
pub mod layout;

// Re-exports for convenience
pub use buffer::{ImageView, RgbaImage};
pub use color::{Hsv, Rgba};
pub use error::{Error, Result};
pub use layout::PixelLayout;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use huemap_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{ImageView, RgbaImage};
    pub use crate::color::{Hsv, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::layout::PixelLayout;
}
