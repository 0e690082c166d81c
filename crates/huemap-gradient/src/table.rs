//! Hue lookup table.
//!
//! An 8-bit RGB pixel can express `6 * 256 = 1536` distinct hues (256 steps
//! in each of the six sectors of the wheel). Sampling the gradient at that
//! resolution gives every representable hue its own slot; coarser tables
//! (e.g. 360 for degrees) merge neighbouring hues and show as banding.
//!
//! The table is built once per remap and shared read-only afterwards.

use crate::{GradientError, GradientResult, GradientSource};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Default table size: one slot per hue representable in 8-bit RGB.
pub const DEFAULT_NUM_SAMPLES: usize = 6 * 256;

/// Immutable map from a discretized hue to a replacement hue.
///
/// # Example
///
/// ```rust
/// use huemap_gradient::HueTable;
///
/// let table = HueTable::identity(4).unwrap();
/// assert_eq!(table.lookup(0.5), 0.5);
/// // Hue 1.0 clamps to the last slot instead of indexing past the end
/// assert_eq!(table.index_for(1.0), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HueTable {
    hues: Vec<f32>,
}

impl HueTable {
    /// Wraps precomputed hues.
    ///
    /// # Errors
    ///
    /// [`GradientError::InvalidArgument`] if `hues` is empty or any entry is
    /// outside `[0, 1)`.
    pub fn from_hues(hues: Vec<f32>) -> GradientResult<Self> {
        if hues.is_empty() {
            return Err(GradientError::invalid_argument("hue table must not be empty"));
        }
        if let Some((i, h)) = hues.iter().enumerate().find(|(_, h)| !(0.0..1.0).contains(*h)) {
            return Err(GradientError::invalid_argument(format!(
                "hue table entry {} is {}, expected [0, 1)",
                i, h
            )));
        }
        Ok(Self { hues })
    }

    /// Table whose slot `i` holds hue `i / len`; remapping with it leaves
    /// hues unchanged up to the table resolution.
    pub fn identity(len: usize) -> GradientResult<Self> {
        if len == 0 {
            return Err(GradientError::invalid_argument("hue table must not be empty"));
        }
        Self::from_hues((0..len).map(|i| i as f32 / len as f32).collect())
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.hues.len()
    }

    /// Always `false`; construction rejects empty tables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hues.is_empty()
    }

    /// All slots.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.hues
    }

    /// Slot for `hue`: `round(hue * len)` clamped to `[0, len - 1]`.
    ///
    /// Hue `1.0` (or anything rounding past the end) maps to the last slot;
    /// negative and NaN hues map to slot 0.
    #[inline]
    pub fn index_for(&self, hue: f32) -> usize {
        let idx = (hue * self.hues.len() as f32).round();
        if idx > 0.0 {
            (idx as usize).min(self.hues.len() - 1)
        } else {
            0
        }
    }

    /// Replacement hue for `hue`.
    #[inline]
    pub fn lookup(&self, hue: f32) -> f32 {
        self.hues[self.index_for(hue)]
    }

    /// Runs of equal consecutive hues as `(first_index, last_index, hue)`.
    pub fn runs(&self) -> Vec<(usize, usize, f32)> {
        let mut runs: Vec<(usize, usize, f32)> = Vec::new();
        for (i, &h) in self.hues.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.2 == h => run.1 = i,
                _ => runs.push((i, i, h)),
            }
        }
        runs
    }
}

/// Builds a hue table by sampling `gradient` at `num_samples + 1` uniform
/// positions over `[0, 1]`, dropping the wrap-around sample at `1.0`, and
/// keeping only the hue of each remaining color.
///
/// # Errors
///
/// [`GradientError::InvalidArgument`] if `num_samples == 0` or the gradient
/// is empty.
///
/// # Example
///
/// ```rust
/// use huemap_gradient::{build_hue_table, Gradient};
///
/// let table = build_hue_table(&Gradient::rainbow(), 1536).unwrap();
/// assert_eq!(table.len(), 1536);
/// assert_eq!(table.runs().len(), 6);
/// ```
pub fn build_hue_table<G: GradientSource + ?Sized>(gradient: &G, num_samples: usize) -> GradientResult<HueTable> {
    sample_table(gradient, num_samples, false)
}

/// Like [`build_hue_table`], reading the gradient from right to left.
pub fn build_hue_table_reversed<G: GradientSource + ?Sized>(
    gradient: &G,
    num_samples: usize,
) -> GradientResult<HueTable> {
    sample_table(gradient, num_samples, true)
}

fn sample_table<G: GradientSource + ?Sized>(
    gradient: &G,
    num_samples: usize,
    reverse: bool,
) -> GradientResult<HueTable> {
    if num_samples == 0 {
        return Err(GradientError::invalid_argument("num_samples must be > 0"));
    }
    if gradient.is_empty() {
        return Err(GradientError::invalid_argument("gradient has no segments"));
    }

    let samples = gradient.sample_uniform(num_samples + 1, reverse);
    if samples.len() < num_samples {
        return Err(GradientError::invalid_argument(format!(
            "gradient returned {} samples, expected {}",
            samples.len(),
            num_samples + 1
        )));
    }

    let hues: Vec<f32> = samples
        .iter()
        .take(num_samples)
        .map(|c| c.to_hsv().h)
        .collect();

    let table = HueTable::from_hues(hues)?;
    debug!(
        num_samples,
        reverse,
        distinct = table.runs().len(),
        "built hue table"
    );
    Ok(table)
}
