//! Magnifier scale policy.
//!
//! Given the current value the policy picks a center bar and scales a small
//! window of bars around it. Every other bar stays at identity scale.

use crate::range::ValueRange;

/// Scale applied to bars outside the magnifier window.
pub const IDENTITY_SCALE: f64 = 1.0;

/// Default magnifier profile as `(offset from center, scale)` pairs.
///
/// The peak sits one bar before the center index.
pub const DEFAULT_PROFILE: [(i64, f64); 5] =
    [(-3, 1.2), (-2, 1.35), (-1, 1.6), (0, 1.35), (1, 1.2)];

/// Magnifier policy mapping a value to per-bar scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnifierPolicy {
    profile: [(i64, f64); 5],
}

impl Default for MagnifierPolicy {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE,
        }
    }
}

impl MagnifierPolicy {
    /// Create the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the scale profile.
    pub fn profile(&self) -> &[(i64, f64)] {
        &self.profile
    }

    /// Compute the center index `floor(v) * floor(N / floor(max)) - 1`.
    ///
    /// `divisor` is `floor(max)` and must be nonzero (see
    /// [`ValueRange::center_divisor`]). The result may fall outside the bar
    /// range.
    pub fn center_index(value: f64, bar_count: usize, divisor: i64) -> i64 {
        debug_assert!(divisor != 0);
        let per_unit = (bar_count as f64 / divisor as f64).floor() as i64;
        (value.floor() as i64)
            .saturating_mul(per_unit)
            .saturating_sub(1)
    }

    /// Bars inside the magnifier window as `(index, scale)` pairs.
    ///
    /// Indices outside `0..bar_count` are skipped.
    pub fn window(&self, value: f64, bar_count: usize, divisor: i64) -> MagnifierWindow {
        let center = Self::center_index(value, bar_count, divisor);
        let entries = self
            .profile
            .iter()
            .filter_map(|&(offset, scale)| {
                let index = center.checked_add(offset)?;
                let index = usize::try_from(index).ok()?;
                (index < bar_count).then_some((index, scale))
            })
            .collect();
        MagnifierWindow { center, entries }
    }

    /// Full per-bar scale mapping for the given value and range.
    pub fn scales(&self, value: f64, bar_count: usize, range: ValueRange) -> Option<Vec<f64>> {
        let divisor = range.center_divisor().ok()?;
        let mut scales = vec![IDENTITY_SCALE; bar_count];
        for (index, scale) in self.window(value, bar_count, divisor).entries() {
            scales[*index] = *scale;
        }
        Some(scales)
    }
}

/// Result of applying the policy to one value.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnifierWindow {
    center: i64,
    entries: Vec<(usize, f64)>,
}

impl MagnifierWindow {
    /// Center index, possibly out of range.
    pub fn center(&self) -> i64 {
        self.center
    }

    /// In-range `(index, scale)` pairs in profile order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Scale for a bar index, identity if outside the window.
    pub fn scale_for(&self, index: usize) -> f64 {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, scale)| *scale)
            .unwrap_or(IDENTITY_SCALE)
    }
}
