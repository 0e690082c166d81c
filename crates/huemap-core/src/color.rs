//! Normalized colors and the RGB <-> HSV conversion.
//!
//! All channels are `f32` in `[0, 1]`. Hue is normalized to `[0, 1)` and
//! wraps, so `0.0` and `1.0` name the same point on the color wheel:
//!
//! ```text
//! 0.000 red
//! 0.167 yellow
//! 0.333 green
//! 0.500 cyan
//! 0.667 blue
//! 0.833 magenta
//! ```
//!
//! A color with zero saturation has no meaningful hue; by convention its hue
//! is `0.0`.
//!
//! # Example
//!
//! ```rust
//! use huemap_core::{Hsv, Rgba};
//!
//! let green = Rgba::from_bytes([0, 255, 0, 255]);
//! let hsv = green.to_hsv();
//! assert!((hsv.h - 1.0 / 3.0).abs() < 1e-6);
//!
//! let back = hsv.to_rgba(green.a);
//! assert_eq!(back.to_bytes(), [0, 255, 0, 255]);
//! ```

/// RGBA color with normalized `f32` channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

/// HSV color. Alpha is carried separately and is not touched by HSV math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in `[0, 1)`
    pub h: f32,
    /// Saturation in `[0, 1]`
    pub s: f32,
    /// Value in `[0, 1]`
    pub v: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a color from normalized channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from normalized RGB.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self::new(
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
            px[3] as f32 / 255.0,
        )
    }

    /// Quantizes to 8-bit channels (round to nearest, clamped).
    #[inline]
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Converts the RGB part to HSV.
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Linear interpolation of all four channels.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

impl Hsv {
    /// Creates an HSV color.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Converts back to RGB, attaching `alpha` unchanged.
    #[inline]
    pub fn to_rgba(&self, alpha: f32) -> Rgba {
        let [r, g, b] = hsv_to_rgb(self.h, self.s, self.v);
        Rgba::new(r, g, b, alpha)
    }

    /// Returns the same color with a different hue.
    #[inline]
    pub fn with_hue(self, h: f32) -> Self {
        Self { h, ..self }
    }
}

/// Quantizes a normalized channel to 8 bits.
#[inline]
pub fn quantize(x: f32) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts normalized RGB to HSV.
///
/// The returned hue is always in `[0, 1)`; grayscale input yields `h = 0`,
/// `s = 0`.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };

    if delta <= 0.0 {
        return Hsv::new(0.0, 0.0, v);
    }

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    Hsv::new(wrap_hue(sector / 6.0), s, v)
}

/// Converts HSV to normalized RGB. Hue wraps, so any finite value is accepted.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [v, v, v];
    }

    let h6 = wrap_hue(h) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Wraps a hue into `[0, 1)`.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let w = h.rem_euclid(1.0);
    // rem_euclid of a tiny negative value rounds up to exactly 1.0
    if w >= 1.0 { 0.0 } else { w }
}
