//! Hue remapping.
//!
//! Every pixel is converted to HSV, its hue is replaced by the table entry at
//! `round(hue * len)` (clamped to the last slot), and it is converted back.
//! Saturation and value are untouched and alpha is copied byte-for-byte, so
//! gray pixels (saturation 0) come out unchanged whatever the gradient.
//!
//! # Algorithm
//!
//! For the pixel at `(x, y)`:
//! 1. Read bytes at `(x + width * y) * bytes_per_pixel`
//! 2. Alpha is the 4th byte, or 255 for RGB sources
//! 3. RGB -> HSV
//! 4. `h = table[clamp(round(h * len), 0, len - 1)]`
//! 5. HSV -> RGB
//! 6. Write RGB + alpha at `(x + width * y) * 4`
//!
//! Pixels are independent, so the scan order only matters for progress
//! reporting; [`remap_par`](crate::parallel::remap_par) produces the same
//! bytes.
//!
//! # Example
//!
//! ```rust
//! use huemap_core::ImageView;
//! use huemap_gradient::{build_hue_table, Gradient};
//! use huemap_ops::remap::{remap_with, RemapObserver};
//!
//! let table = build_hue_table(&Gradient::rainbow(), 1536).unwrap();
//! let src = vec![200u8; 4 * 4 * 4];
//! let view = ImageView::new(&src, 4, 4, 4).unwrap();
//!
//! let mut last = 0.0;
//! let mut observer = RemapObserver::new().on_progress(|f| last = f);
//! let out = remap_with(&view, &table, &mut observer).unwrap();
//! drop(observer);
//!
//! assert_eq!(last, 1.0);
//! assert_eq!(out.data(), &src[..]); // gray stays gray
//! ```

use huemap_core::{Error, ImageView, PixelLayout, Result, Rgba, RgbaImage};
use huemap_gradient::HueTable;
use std::sync::atomic::{AtomicBool, Ordering};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Optional hooks for a remap pass: per-row progress and cooperative
/// cancellation.
///
/// Progress is reported once per completed row as `(y + 1) / height`.
/// The cancel flag is checked before each row; rows already written are
/// complete but the partial image is dropped and [`Error::Cancelled`] is
/// returned.
#[derive(Default)]
pub struct RemapObserver<'a> {
    progress: Option<Box<dyn FnMut(f32) + 'a>>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> RemapObserver<'a> {
    /// Observer with no hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the progress callback.
    pub fn on_progress(mut self, f: impl FnMut(f32) + 'a) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    /// Sets the cancel flag.
    pub fn cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|f| f.load(Ordering::Relaxed))
    }

    #[inline]
    fn report(&mut self, fraction: f32) {
        if let Some(cb) = self.progress.as_mut() {
            cb(fraction);
        }
    }
}

impl std::fmt::Debug for RemapObserver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemapObserver")
            .field("progress", &self.progress.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

/// Remaps a raw buffer of `bytes_per_pixel` (3 or 4) interleaved bytes.
///
/// # Errors
///
/// Invalid-argument errors for a bad `bytes_per_pixel` or a buffer whose
/// length does not match `width * height * bytes_per_pixel`. Nothing is
/// allocated for the output when validation fails.
pub fn remap(
    source: &[u8],
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
    table: &HueTable,
) -> Result<RgbaImage> {
    let view = ImageView::new(source, width, height, bytes_per_pixel)?;
    remap_image(&view, table)
}

/// Remaps a validated view.
pub fn remap_image(view: &ImageView<'_>, table: &HueTable) -> Result<RgbaImage> {
    remap_with(view, table, &mut RemapObserver::new())
}

/// Remaps a validated view, reporting progress and honouring cancellation.
pub fn remap_with(
    view: &ImageView<'_>,
    table: &HueTable,
    observer: &mut RemapObserver<'_>,
) -> Result<RgbaImage> {
    check_table(table)?;
    let mut out = RgbaImage::new(view.width(), view.height())?;
    debug!(
        width = view.width(),
        height = view.height(),
        layout = %view.layout(),
        table = table.len(),
        "remapping hues"
    );

    // Rows of a zero-width image are empty but still reported
    let height = view.height() as usize;
    let stride = out.stride();
    let layout = view.layout();
    let data = out.data_mut();
    for y in 0..height {
        if observer.is_cancelled() {
            debug!(row = y, "remap cancelled");
            return Err(Error::Cancelled);
        }
        let dst_row = &mut data[y * stride..(y + 1) * stride];
        remap_row(view.row(y as u32), layout, dst_row, table);
        let fraction = (y + 1) as f32 / height as f32;
        trace!(row = y, fraction, "row done");
        observer.report(fraction);
    }
    Ok(out)
}

pub(crate) fn check_table(table: &HueTable) -> Result<()> {
    if table.is_empty() {
        return Err(Error::invalid_argument("hue table must not be empty"));
    }
    Ok(())
}

/// Remaps one row of source bytes into one row of RGBA bytes.
#[inline]
pub(crate) fn remap_row(src: &[u8], layout: PixelLayout, dst: &mut [u8], table: &HueTable) {
    let bpp = layout.bytes_per_pixel();
    for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(4)) {
        let a = if layout.has_alpha() { s[3] } else { 255 };
        d.copy_from_slice(&remap_pixel([s[0], s[1], s[2], a], table));
    }
}

/// Replaces the hue of one RGBA pixel. Alpha is returned unchanged.
///
/// ```rust
/// use huemap_gradient::HueTable;
/// use huemap_ops::remap_pixel;
///
/// // Every hue maps to 0.5 (cyan)
/// let table = HueTable::from_hues(vec![0.5; 8]).unwrap();
/// assert_eq!(remap_pixel([255, 0, 0, 40], &table), [0, 255, 255, 40]);
/// ```
#[inline]
pub fn remap_pixel(px: [u8; 4], table: &HueTable) -> [u8; 4] {
    let color = Rgba::from_bytes(px);
    let hsv = color.to_hsv();
    let mapped = hsv.with_hue(table.lookup(hsv.h)).to_rgba(color.a);
    let [r, g, b, _] = mapped.to_bytes();
    [r, g, b, px[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use huemap_gradient::{build_hue_table, Gradient, DEFAULT_NUM_SAMPLES};
    use std::cell::RefCell;

    fn rainbow_table() -> HueTable {
        build_hue_table(&Gradient::rainbow(), DEFAULT_NUM_SAMPLES).unwrap()
    }

    #[test]
    fn test_pure_red_stays_red() {
        let out = remap(&[255, 0, 0], 1, 1, 3, &rainbow_table()).unwrap();
        assert_eq!(out.data(), &[255, 0, 0, 255]);
    }

    #[test]
    fn test_gray_unchanged() {
        let out = remap(&[128, 128, 128], 1, 1, 3, &rainbow_table()).unwrap();
        assert_eq!(out.data(), &[128, 128, 128, 255]);
    }

    #[test]
    fn test_two_pixel_rgb() {
        let out = remap(&[255, 0, 0, 0, 255, 0], 2, 1, 3, &rainbow_table()).unwrap();
        assert_eq!(out.data().len(), 8);
        assert_eq!(out.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(out.pixel(1, 0), [0, 255, 0, 255]);
    }

    #[test]
    fn test_hue_lands_in_its_band() {
        // Orange (~30 degrees) is in the red band [0, 1/6)
        let out = remap(&[255, 128, 0, 255], 1, 1, 4, &rainbow_table()).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 0, 0, 255]);

        // Chartreuse (~73 degrees) is in the yellow band [1/6, 2/6)
        let out = remap(&[200, 255, 0, 255], 1, 1, 4, &rainbow_table()).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 255, 0, 255]);

        // Violet (~275 degrees) is in the blue band [4/6, 5/6)
        let out = remap(&[140, 0, 255, 255], 1, 1, 4, &rainbow_table()).unwrap();
        assert_eq!(out.pixel(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn test_keeps_saturation_and_value() {
        // Dark, desaturated green -> same s/v, still green band
        let out = remap(&[40, 100, 40, 10], 1, 1, 4, &rainbow_table()).unwrap();
        assert_eq!(out.pixel(0, 0), [40, 100, 40, 10]);
    }

    #[test]
    fn test_invalid_bpp() {
        for bpp in [0, 1, 2, 5] {
            let err = remap(&[0; 10], 1, 1, bpp, &rainbow_table()).unwrap_err();
            assert!(err.is_invalid_argument(), "bpp {}", bpp);
        }
    }

    #[test]
    fn test_buffer_mismatch() {
        let err = remap(&[0; 7], 2, 1, 4, &rainbow_table()).unwrap_err();
        assert!(matches!(err, Error::BufferSize { expected: 8, got: 7 }));
    }

    #[test]
    fn test_empty_image() {
        let out = remap(&[], 0, 5, 3, &rainbow_table()).unwrap();
        assert!(out.data().is_empty());
        assert_eq!(out.height(), 5);
    }

    #[test]
    fn test_zero_width_still_reports_rows() {
        let seen = RefCell::new(Vec::new());
        let view = ImageView::new(&[], 0, 4, 4).unwrap();
        let mut observer = RemapObserver::new().on_progress(|f| seen.borrow_mut().push(f));
        let out = remap_with(&view, &rainbow_table(), &mut observer).unwrap();
        drop(observer);
        assert!(out.data().is_empty());
        assert_eq!(seen.into_inner(), vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_progress_once_per_row() {
        let seen = RefCell::new(Vec::new());
        let src = vec![0u8; 3 * 4 * 3];
        let view = ImageView::new(&src, 3, 4, 3).unwrap();
        let mut observer = RemapObserver::new().on_progress(|f| seen.borrow_mut().push(f));
        remap_with(&view, &rainbow_table(), &mut observer).unwrap();
        drop(observer);
        assert_eq!(seen.into_inner(), vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_cancel_before_first_row() {
        let flag = AtomicBool::new(true);
        let src = vec![0u8; 4 * 2 * 2];
        let view = ImageView::new(&src, 2, 2, 4).unwrap();
        let mut observer = RemapObserver::new().cancel_flag(&flag);
        let err = remap_with(&view, &rainbow_table(), &mut observer).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_cancel_between_rows() {
        let flag = AtomicBool::new(false);
        let rows = RefCell::new(0);
        let src = vec![0u8; 4 * 2 * 3];
        let view = ImageView::new(&src, 2, 3, 4).unwrap();
        let mut observer = RemapObserver::new()
            .cancel_flag(&flag)
            .on_progress(|_| {
                *rows.borrow_mut() += 1;
                flag.store(true, Ordering::Relaxed);
            });
        assert!(remap_with(&view, &rainbow_table(), &mut observer).is_err());
        drop(observer);
        assert_eq!(rows.into_inner(), 1);
    }

    #[test]
    fn test_output_does_not_alias_source() {
        let src = vec![10u8, 20, 30, 40];
        let out = remap(&src, 1, 1, 4, &rainbow_table()).unwrap();
        assert_ne!(out.data().as_ptr(), src.as_ptr());
    }
}
