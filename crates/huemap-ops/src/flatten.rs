//! Flattening onto an opaque background.
//!
//! The remapped image keeps the source alpha. Flattening composites it over a
//! solid background with Porter-Duff *over* and drops the alpha channel,
//! producing an RGB buffer:
//!
//! ```text
//! out = fg * a + bg * (1 - a)
//! ```

use huemap_core::RgbaImage;
use huemap_core::color::quantize;

/// Composites `image` over an opaque `background`, returning RGB bytes
/// (`width * height * 3`).
///
/// # Example
///
/// ```rust
/// use huemap_core::RgbaImage;
/// use huemap_ops::flatten;
///
/// let img = RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 255, 0, 0, 0]).unwrap();
/// assert_eq!(flatten(&img, [0, 0, 255]), vec![255, 0, 0, 0, 0, 255]);
/// ```
pub fn flatten(image: &RgbaImage, background: [u8; 3]) -> Vec<u8> {
    let bg = background.map(|c| c as f32 / 255.0);
    image
        .data()
        .chunks_exact(4)
        .flat_map(|px| over_opaque([px[0], px[1], px[2]], px[3], bg))
        .collect()
}

/// Foreground with alpha over an opaque background.
#[inline]
fn over_opaque(fg: [u8; 3], alpha: u8, bg: [f32; 3]) -> [u8; 3] {
    match alpha {
        255 => fg,
        0 => bg.map(quantize),
        a => {
            let a = a as f32 / 255.0;
            let mut out = [0u8; 3];
            for ((o, &f), &b) in out.iter_mut().zip(&fg).zip(&bg) {
                *o = quantize(f as f32 / 255.0 * a + b * (1.0 - a));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_passthrough() {
        let img = RgbaImage::from_raw(1, 1, vec![12, 34, 56, 255]).unwrap();
        assert_eq!(flatten(&img, [255, 255, 255]), vec![12, 34, 56]);
    }

    #[test]
    fn test_transparent_is_background() {
        let img = RgbaImage::from_raw(1, 1, vec![12, 34, 56, 0]).unwrap();
        assert_eq!(flatten(&img, [255, 255, 255]), vec![255, 255, 255]);
    }

    #[test]
    fn test_half_alpha_blends() {
        let img = RgbaImage::from_raw(1, 1, vec![255, 0, 0, 128]).unwrap();
        let out = flatten(&img, [0, 0, 255]);
        assert_eq!(out, vec![128, 0, 127]);
    }

    #[test]
    fn test_size() {
        let img = RgbaImage::new(5, 3).unwrap();
        assert_eq!(flatten(&img, [0, 0, 0]).len(), 5 * 3 * 3);
    }
}
