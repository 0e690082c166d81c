//! # huemap-gradient
//!
//! Cyclic color gradients and the hue lookup table built from them.
//!
//! # Types
//!
//! - [`Gradient`] - Ordered segments covering `[0, 1]`, sampled like GIMP gradients
//! - [`Segment`] - One interval with endpoint colors, blend function and color model
//! - [`HueTable`] - Immutable table mapping a discretized hue to a replacement hue
//!
//! # Supported Formats
//!
//! - `.ggr` - GIMP gradient ([`ggr`] module)
//!
//! # Usage
//!
//! ```rust
//! use huemap_gradient::{build_hue_table, Gradient, DEFAULT_NUM_SAMPLES};
//!
//! let rainbow = Gradient::rainbow();
//! let table = build_hue_table(&rainbow, DEFAULT_NUM_SAMPLES).unwrap();
//! assert_eq!(table.len(), 1536);
//!
//! // Pure green keeps its hue
//! assert!((table.lookup(1.0 / 3.0) - 1.0 / 3.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`huemap-core`] - Colors and RGB <-> HSV
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `huemap-ops` - Hue remapping
//! - `huemap-cli` - Gradient loading and export

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod gradient;
mod segment;
mod table;
pub mod ggr;

pub use error::{GradientError, GradientResult};
pub use gradient::{Gradient, GradientSource, RAINBOW_HUES};
pub use segment::{BlendFunction, ColorModel, Segment};
pub use table::{build_hue_table, build_hue_table_reversed, HueTable, DEFAULT_NUM_SAMPLES};
