//! # huemap-ops
//!
//! Pixel operations for hue mapping.
//!
//! # Modules
//!
//! - [`remap`] - Replace every pixel's hue through a [`HueTable`](huemap_gradient::HueTable)
//! - [`flatten`] - Composite an RGBA result onto an opaque background
//! - [`parallel`] - Row-parallel remap (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use huemap_gradient::{build_hue_table, Gradient, DEFAULT_NUM_SAMPLES};
//! use huemap_ops::remap;
//!
//! let table = build_hue_table(&Gradient::rainbow(), DEFAULT_NUM_SAMPLES).unwrap();
//! let src = [255, 0, 0, 0, 255, 0];
//! let out = remap(&src, 2, 1, 3, &table).unwrap();
//! assert_eq!(out.data(), &[255, 0, 0, 255, 0, 255, 0, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod flatten;
pub mod remap;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use flatten::flatten;
pub use remap::{remap, remap_image, remap_pixel, remap_with, RemapObserver};

#[cfg(feature = "parallel")]
pub use parallel::remap_par;
