//! Interleaved 8-bit pixel layouts.
//!
//! Only two layouts exist: `RGB` (3 bytes per pixel) and `RGBA`
//! (4 bytes per pixel). Anything else is rejected at construction.

use crate::{Error, Result};

/// Channel layout of an interleaved 8-bit pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelLayout {
    /// Red, green, blue. Alpha is implied opaque.
    Rgb,
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
}

impl PixelLayout {
    /// Builds a layout from a raw bytes-per-pixel count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use huemap_core::PixelLayout;
    ///
    /// assert_eq!(PixelLayout::from_bytes_per_pixel(3).unwrap(), PixelLayout::Rgb);
    /// assert!(PixelLayout::from_bytes_per_pixel(1).is_err());
    /// ```
    pub fn from_bytes_per_pixel(bytes_per_pixel: u32) -> Result<Self> {
        match bytes_per_pixel {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            n => Err(Error::invalid_layout(n)),
        }
    }

    /// Bytes occupied by one pixel.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the layout stores an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Bytes needed for a `width x height` image, or `None` on overflow.
    #[inline]
    pub fn buffer_len(&self, width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(self.bytes_per_pixel()))
    }
}

impl std::fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_per_pixel() {
        assert_eq!(PixelLayout::from_bytes_per_pixel(4).unwrap(), PixelLayout::Rgba);
        for bad in [0, 1, 2, 5, 8] {
            let err = PixelLayout::from_bytes_per_pixel(bad).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(PixelLayout::Rgb.buffer_len(2, 1), Some(6));
        assert_eq!(PixelLayout::Rgba.buffer_len(0, 100), Some(0));
        assert!(PixelLayout::Rgba.buffer_len(u32::MAX, u32::MAX).is_none());
    }

    #[test]
    fn test_has_alpha() {
        assert!(!PixelLayout::Rgb.has_alpha());
        assert!(PixelLayout::Rgba.has_alpha());
    }
}
