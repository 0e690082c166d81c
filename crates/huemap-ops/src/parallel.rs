//! Row-parallel hue remapping using Rayon.
//!
//! The hue table is read-only and every pixel depends only on its own bytes,
//! so rows can be processed in any order. Output is byte-identical to
//! [`remap_image`](crate::remap::remap_image).
//!
//! # Example
//!
//! ```rust
//! use huemap_core::ImageView;
//! use huemap_gradient::{build_hue_table, Gradient};
//! use huemap_ops::{remap_image, remap_par};
//!
//! let table = build_hue_table(&Gradient::rainbow(), 1536).unwrap();
//! let src: Vec<u8> = (0..64 * 64 * 3).map(|i| (i * 7 % 256) as u8).collect();
//! let view = ImageView::new(&src, 64, 64, 3).unwrap();
//!
//! assert_eq!(remap_par(&view, &table).unwrap(), remap_image(&view, &table).unwrap());
//! ```

use crate::remap::{check_table, remap_row};
use huemap_core::{ImageView, Result, RgbaImage};
use huemap_gradient::HueTable;
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Parallel version of [`remap_image`](crate::remap::remap_image).
pub fn remap_par(view: &ImageView<'_>, table: &HueTable) -> Result<RgbaImage> {
    check_table(table)?;
    let mut out = RgbaImage::new(view.width(), view.height())?;
    debug!(
        width = view.width(),
        height = view.height(),
        layout = %view.layout(),
        threads = rayon::current_num_threads(),
        "remapping hues in parallel"
    );
    if view.is_empty() {
        return Ok(out);
    }

    let stride = out.stride();
    let layout = view.layout();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            remap_row(view.row(y as u32), layout, dst_row, table);
        });

    Ok(out)
}
