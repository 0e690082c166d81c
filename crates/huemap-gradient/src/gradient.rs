//! Cyclic gradients.
//!
//! A [`Gradient`] is an ordered list of contiguous [`Segment`]s covering
//! `[0, 1]`. Because hue wraps, position `1.0` names the same color as `0.0`
//! for any gradient used as a hue map.
//!
//! Segment lookup is half-open: position `p` belongs to the segment with
//! `left <= p < right`, and `1.0` belongs to the last segment. On the default
//! rainbow this puts every pure primary and secondary color in its own band.

use crate::{GradientError, GradientResult, Segment};
use huemap_core::Rgba;

/// Tolerance for segment contiguity checks.
const COVERAGE_EPSILON: f32 = 1e-4;

/// Band colors of the default gradient, in order around the wheel.
pub const RAINBOW_HUES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0], // red
    [1.0, 1.0, 0.0], // yellow
    [0.0, 1.0, 0.0], // green
    [0.0, 1.0, 1.0], // cyan
    [0.0, 0.0, 1.0], // blue
    [1.0, 0.0, 1.0], // magenta
];

/// Anything that can be sampled at uniformly spaced positions.
///
/// [`build_hue_table`](crate::build_hue_table) only needs this, so callers can
/// feed procedural gradients without building segments.
pub trait GradientSource {
    /// Returns `n` colors at positions `i / (n - 1)` for `i` in `0..n`
    /// (a single sample is taken at `0.0`). With `reverse`, position `p` is
    /// read at `1 - p`.
    fn sample_uniform(&self, n: usize, reverse: bool) -> Vec<Rgba>;

    /// Whether the source has nothing to sample.
    fn is_empty(&self) -> bool;
}

/// A named, cyclic gradient made of contiguous segments.
///
/// # Example
///
/// ```rust
/// use huemap_gradient::{Gradient, GradientSource};
///
/// let rainbow = Gradient::rainbow();
/// let samples = rainbow.sample_uniform(7, false);
/// assert_eq!(samples.len(), 7);
/// assert_eq!(samples[2].g, 1.0); // green band
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    name: String,
    segments: Vec<Segment>,
}

impl Gradient {
    /// Creates a gradient from segments.
    ///
    /// An empty segment list is accepted; sampling it is rejected later.
    ///
    /// # Errors
    ///
    /// [`GradientError::InvalidArgument`] if a segment is outside `[0, 1]`,
    /// has `middle` outside `[left, right]`, or the segments do not cover
    /// `[0, 1]` contiguously.
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> GradientResult<Self> {
        validate_segments(&segments).map_err(|(_, msg)| GradientError::invalid_argument(msg))?;
        Ok(Self {
            name: name.into(),
            segments,
        })
    }

    /// The default hue map: six flat bands, red, yellow, green, cyan, blue,
    /// magenta, each covering one sixth of the wheel with no blending.
    pub fn rainbow() -> Self {
        let mut gradient = Self::uniform("Hue gradient", RAINBOW_HUES.len());
        for (i, &[r, g, b]) in RAINBOW_HUES.iter().enumerate() {
            if let Some(seg) = gradient.segment_mut(i) {
                seg.left_color = Rgba::rgb(r, g, b);
                seg.right_color = seg.left_color;
            }
        }
        gradient
    }

    /// Splits `[0, 1]` into `count` equal linear segments, all black.
    ///
    /// Callers then paint the endpoint colors through [`segment_mut`](Self::segment_mut).
    /// A count of 0 gives an empty gradient.
    pub fn uniform(name: impl Into<String>, count: usize) -> Self {
        let segments = (0..count)
            .map(|i| Segment::flat(i as f32 / count as f32, (i + 1) as f32 / count as f32, Rgba::BLACK))
            .collect();
        Self {
            name: name.into(),
            segments,
        }
    }

    /// Gradient name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the gradient.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Segments in order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable segment access. Positions must stay contiguous.
    #[inline]
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Index of the segment containing `pos` (half-open lookup).
    ///
    /// Returns `None` only for an empty gradient.
    pub fn segment_index(&self, pos: f32) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }
        let idx = self.segments.partition_point(|s| s.right <= pos);
        Some(idx.min(self.segments.len() - 1))
    }

    /// Color at `pos`, clamped to `[0, 1]`.
    ///
    /// Returns `None` for an empty gradient.
    pub fn color_at(&self, pos: f32) -> Option<Rgba> {
        let pos = if pos.is_nan() { 0.0 } else { pos.clamp(0.0, 1.0) };
        let idx = self.segment_index(pos)?;
        Some(self.segments[idx].color_at(pos))
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::rainbow()
    }
}

impl GradientSource for Gradient {
    fn sample_uniform(&self, n: usize, reverse: bool) -> Vec<Rgba> {
        if self.segments.is_empty() {
            return Vec::new();
        }
        // i / (n - 1), not i * step: must compare equal to segment boundaries
        let last = n.saturating_sub(1).max(1) as f32;
        (0..n)
            .filter_map(|i| {
                let pos = i as f32 / last;
                let pos = if reverse { 1.0 - pos } else { pos };
                self.color_at(pos)
            })
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Checks that segments cover `[0, 1]` contiguously. On failure returns the
/// index of the offending segment with a message.
pub(crate) fn validate_segments(segments: &[Segment]) -> Result<(), (usize, String)> {
    let mut expected_left = 0.0_f32;
    for (i, seg) in segments.iter().enumerate() {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !in_unit(seg.left) || !in_unit(seg.right) || seg.left > seg.right {
            return Err((
                i,
                format!("segment {} spans [{}, {}], expected an interval inside [0, 1]", i, seg.left, seg.right),
            ));
        }
        if seg.middle < seg.left || seg.middle > seg.right {
            return Err((
                i,
                format!("segment {} middle {} outside [{}, {}]", i, seg.middle, seg.left, seg.right),
            ));
        }
        if (seg.left - expected_left).abs() > COVERAGE_EPSILON {
            return Err((i, format!("segment {} starts at {}, expected {}", i, seg.left, expected_left)));
        }
        expected_left = seg.right;
    }
    if !segments.is_empty() && (expected_left - 1.0).abs() > COVERAGE_EPSILON {
        return Err((segments.len() - 1, format!("segments end at {}, expected 1", expected_left)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorModel;

    #[test]
    fn test_rainbow_bands() {
        let g = Gradient::rainbow();
        assert_eq!(g.len(), 6);
        for (i, &[r, gr, b]) in RAINBOW_HUES.iter().enumerate() {
            let center = (i as f32 + 0.5) / 6.0;
            assert_eq!(g.color_at(center), Some(Rgba::rgb(r, gr, b)));
        }
    }

    #[test]
    fn test_rainbow_boundaries_are_half_open() {
        let g = Gradient::rainbow();
        assert_eq!(g.segment_index(0.0), Some(0));
        assert_eq!(g.segment_index(1.0 / 6.0), Some(1));
        assert_eq!(g.segment_index(2.0 / 6.0), Some(2));
        assert_eq!(g.segment_index(1.0), Some(5));
    }

    #[test]
    fn test_sample_uniform_inclusive() {
        let g = Gradient::rainbow();
        let s = g.sample_uniform(13, false);
        assert_eq!(s.len(), 13);
        assert_eq!(s[0], Rgba::rgb(1.0, 0.0, 0.0));
        // last sample is position 1.0, inside the magenta band
        assert_eq!(s[12], Rgba::rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_sample_uniform_reverse() {
        let g = Gradient::rainbow();
        let fwd = g.sample_uniform(13, false);
        let rev = g.sample_uniform(13, true);
        assert_eq!(rev[0], fwd[12]);
        assert_eq!(rev[6], Rgba::rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_empty_gradient() {
        let g = Gradient::new("empty", Vec::new()).unwrap();
        assert!(GradientSource::is_empty(&g));
        assert!(g.color_at(0.5).is_none());
        assert!(g.sample_uniform(4, false).is_empty());
    }

    #[test]
    fn test_validation() {
        let red = Rgba::rgb(1.0, 0.0, 0.0);
        let gap = vec![Segment::flat(0.0, 0.4, red), Segment::flat(0.5, 1.0, red)];
        assert!(Gradient::new("gap", gap).unwrap_err().is_invalid_argument());

        let short = vec![Segment::flat(0.0, 0.9, red)];
        assert!(Gradient::new("short", short).is_err());

        let mut bad_middle = Segment::flat(0.0, 1.0, red);
        bad_middle.middle = 1.5;
        assert!(Gradient::new("middle", vec![bad_middle]).is_err());

        let ok = vec![Segment::flat(0.0, 0.5, red), Segment::flat(0.5, 1.0, red)];
        assert!(Gradient::new("ok", ok).is_ok());
    }

    #[test]
    fn test_uniform_split() {
        let mut g = Gradient::uniform("split", 4);
        assert_eq!(g.len(), 4);
        assert_eq!(g.segments()[3].right, 1.0);
        let seg = g.segment_mut(1).unwrap();
        seg.model = ColorModel::HsvCw;
        assert_eq!(g.segments()[1].model, ColorModel::HsvCw);
        assert!(GradientSource::is_empty(&Gradient::uniform("none", 0)));
    }

    #[test]
    fn test_rainbow_is_painted_uniform_split() {
        let split = Gradient::uniform("split", 6);
        for (band, plain) in Gradient::rainbow().segments().iter().zip(split.segments()) {
            assert_eq!((band.left, band.right), (plain.left, plain.right));
            assert_eq!(band.left_color, band.right_color);
            assert_ne!(band.left_color, Rgba::BLACK);
        }
    }
}
