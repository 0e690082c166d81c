//! Gradient segments.
//!
//! A segment spans `[left, right]` with a `middle` control point. The local
//! position inside the segment is shaped by a [`BlendFunction`] into a blend
//! factor, and the two endpoint colors are mixed with that factor according to
//! a [`ColorModel`].
//!
//! The model and its numeric codes match GIMP's gradient segments, so `.ggr`
//! files round-trip without loss.

use huemap_core::color::rgb_to_hsv;
use huemap_core::{Hsv, Rgba};
use std::f32::consts::PI;

const EPSILON: f32 = 1e-6;

/// Shapes the local position inside a segment into a blend factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendFunction {
    /// Piecewise linear through the middle point.
    #[default]
    Linear,
    /// Power curve passing 0.5 at the middle point.
    Curved,
    /// Sinusoidal ease in/out.
    Sine,
    /// Quarter circle, fast start.
    SphereIncreasing,
    /// Quarter circle, slow start.
    SphereDecreasing,
    /// Hard switch from left to right color at the middle point.
    Step,
}

impl BlendFunction {
    /// Numeric code used by `.ggr` files.
    pub const fn code(self) -> u32 {
        match self {
            Self::Linear => 0,
            Self::Curved => 1,
            Self::Sine => 2,
            Self::SphereIncreasing => 3,
            Self::SphereDecreasing => 4,
            Self::Step => 5,
        }
    }

    /// Parses a `.ggr` numeric code.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Linear),
            1 => Some(Self::Curved),
            2 => Some(Self::Sine),
            3 => Some(Self::SphereIncreasing),
            4 => Some(Self::SphereDecreasing),
            5 => Some(Self::Step),
            _ => None,
        }
    }

    /// Blend factor for local position `t` with the middle point at `m`,
    /// both relative to the segment.
    pub fn factor(self, m: f32, t: f32) -> f32 {
        match self {
            Self::Linear => linear_factor(m, t),
            Self::Curved => {
                let m = m.max(EPSILON);
                t.powf(0.5_f32.ln() / m.ln())
            }
            Self::Sine => {
                let f = linear_factor(m, t);
                ((-PI / 2.0 + PI * f).sin() + 1.0) / 2.0
            }
            Self::SphereIncreasing => {
                let f = linear_factor(m, t) - 1.0;
                (1.0 - f * f).max(0.0).sqrt()
            }
            Self::SphereDecreasing => {
                let f = linear_factor(m, t);
                1.0 - (1.0 - f * f).max(0.0).sqrt()
            }
            Self::Step => {
                if t >= m {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[inline]
fn linear_factor(m: f32, t: f32) -> f32 {
    if t <= m {
        if m < EPSILON { 0.0 } else { 0.5 * t / m }
    } else {
        let rest = 1.0 - m;
        if rest < EPSILON {
            1.0
        } else {
            0.5 + 0.5 * (t - m) / rest
        }
    }
}

/// How endpoint colors are mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// Straight RGBA interpolation.
    #[default]
    Rgb,
    /// HSV interpolation, hue travels counter-clockwise (increasing).
    HsvCcw,
    /// HSV interpolation, hue travels clockwise (decreasing).
    HsvCw,
}

impl ColorModel {
    /// Numeric code used by `.ggr` files.
    pub const fn code(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::HsvCcw => 1,
            Self::HsvCw => 2,
        }
    }

    /// Parses a `.ggr` numeric code.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Rgb),
            1 => Some(Self::HsvCcw),
            2 => Some(Self::HsvCw),
            _ => None,
        }
    }

    /// Mixes `left` and `right` by `factor`.
    pub fn mix(self, left: &Rgba, right: &Rgba, factor: f32) -> Rgba {
        if self == Self::Rgb {
            return left.lerp(right, factor);
        }

        let l = rgb_to_hsv(left.r, left.g, left.b);
        let r = rgb_to_hsv(right.r, right.g, right.b);

        let h = if self == Self::HsvCcw {
            if l.h < r.h {
                l.h + (r.h - l.h) * factor
            } else {
                l.h + (1.0 - (l.h - r.h)) * factor
            }
        } else if r.h < l.h {
            l.h - (l.h - r.h) * factor
        } else {
            l.h - (1.0 - (r.h - l.h)) * factor
        };

        let hsv = Hsv::new(h, l.s + (r.s - l.s) * factor, l.v + (r.v - l.v) * factor);
        hsv.to_rgba(left.a + (right.a - left.a) * factor)
    }
}

/// One interval of a [`Gradient`](crate::Gradient).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start position in `[0, 1]`
    pub left: f32,
    /// Middle control point, `left <= middle <= right`
    pub middle: f32,
    /// End position in `[0, 1]`
    pub right: f32,
    /// Color at `left`
    pub left_color: Rgba,
    /// Color at `right`
    pub right_color: Rgba,
    /// Position shaping
    pub blend: BlendFunction,
    /// Color mixing
    pub model: ColorModel,
}

impl Segment {
    /// Creates a linear RGB segment with the middle point centered.
    pub fn new(left: f32, right: f32, left_color: Rgba, right_color: Rgba) -> Self {
        Self {
            left,
            middle: (left + right) / 2.0,
            right,
            left_color,
            right_color,
            blend: BlendFunction::Linear,
            model: ColorModel::Rgb,
        }
    }

    /// Creates a segment painted with one flat color.
    pub fn flat(left: f32, right: f32, color: Rgba) -> Self {
        Self::new(left, right, color, color)
    }

    /// Sets the blend function.
    pub fn with_blend(mut self, blend: BlendFunction) -> Self {
        self.blend = blend;
        self
    }

    /// Sets the color model.
    pub fn with_model(mut self, model: ColorModel) -> Self {
        self.model = model;
        self
    }

    /// Width of the segment.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Color at absolute gradient position `pos`.
    ///
    /// `pos` is expected inside the segment; values outside extrapolate the
    /// blend factor and are clamped to the endpoint colors.
    pub fn color_at(&self, pos: f32) -> Rgba {
        let width = self.width();
        let (m, t) = if width < EPSILON {
            (0.5, 0.5)
        } else {
            (
                (self.middle - self.left) / width,
                ((pos - self.left) / width).clamp(0.0, 1.0),
            )
        };
        let factor = self.blend.factor(m, t);
        self.model.mix(&self.left_color, &self.right_color, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_factor_passes_half_at_middle() {
        for m in [0.2, 0.5, 0.8] {
            assert_abs_diff_eq!(BlendFunction::Linear.factor(m, m), 0.5);
            assert_abs_diff_eq!(BlendFunction::Linear.factor(m, 0.0), 0.0);
            assert_abs_diff_eq!(BlendFunction::Linear.factor(m, 1.0), 1.0);
        }
    }

    #[test]
    fn test_curved_passes_half_at_middle() {
        assert_abs_diff_eq!(BlendFunction::Curved.factor(0.3, 0.3), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_endpoints() {
        for blend in [BlendFunction::Sine, BlendFunction::SphereIncreasing, BlendFunction::SphereDecreasing] {
            assert_abs_diff_eq!(blend.factor(0.5, 0.0), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(blend.factor(0.5, 1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_step() {
        assert_eq!(BlendFunction::Step.factor(0.5, 0.49), 0.0);
        assert_eq!(BlendFunction::Step.factor(0.5, 0.5), 1.0);
    }

    #[test]
    fn test_codes_roundtrip() {
        for code in 0..6 {
            assert_eq!(BlendFunction::from_code(code).unwrap().code(), code);
        }
        assert!(BlendFunction::from_code(6).is_none());
        for code in 0..3 {
            assert_eq!(ColorModel::from_code(code).unwrap().code(), code);
        }
        assert!(ColorModel::from_code(3).is_none());
    }

    #[test]
    fn test_rgb_mix() {
        let seg = Segment::new(0.0, 1.0, Rgba::rgb(0.0, 0.0, 0.0), Rgba::rgb(1.0, 1.0, 1.0));
        let c = seg.color_at(0.25);
        assert_abs_diff_eq!(c.r, 0.25);
        assert_abs_diff_eq!(c.a, 1.0);
    }

    #[test]
    fn test_hsv_ccw_full_wheel() {
        // Red to red counter-clockwise walks the whole wheel
        let red = Rgba::rgb(1.0, 0.0, 0.0);
        let seg = Segment::new(0.0, 1.0, red, red).with_model(ColorModel::HsvCcw);
        let c = seg.color_at(0.5);
        assert_abs_diff_eq!(c.to_hsv().h, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_hsv_cw_goes_backwards() {
        let red = Rgba::rgb(1.0, 0.0, 0.0);
        let green = Rgba::rgb(0.0, 1.0, 0.0);
        let seg = Segment::new(0.0, 1.0, red, green).with_model(ColorModel::HsvCw);
        // Clockwise from 0.0 to 0.333 passes through magenta/blue
        let c = seg.color_at(0.25);
        assert_abs_diff_eq!(c.to_hsv().h, 1.0 - 0.25 * (2.0 / 3.0), epsilon = 1e-5);
    }

    #[test]
    fn test_flat_segment() {
        let seg = Segment::flat(0.0, 0.5, Rgba::rgb(0.0, 0.0, 1.0));
        for pos in [0.0, 0.1, 0.25, 0.5] {
            assert_eq!(seg.color_at(pos), Rgba::rgb(0.0, 0.0, 1.0));
        }
    }
}
