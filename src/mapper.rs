//! Pointer-to-value mapping.

use crate::range::ValueRange;

/// Map a widget-local pointer x coordinate into a value.
///
/// The raw value is `x * max / width`, then clamped into `[min, max]`.
/// Scaling uses `max` rather than `max - min`, so ranges with a nonzero
/// minimum are offset relative to the drag position. `width` must be
/// positive.
pub fn map(x: f64, width: f64, min: f64, max: f64) -> f64 {
    // Dividing first makes `x == width` land exactly on `max`.
    let raw = x / width * max;
    min.max(max.min(raw))
}

/// Pointer-to-value mapper bound to a validated range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    range: ValueRange,
}

impl ValueMapper {
    /// Create a mapper for the given range.
    pub fn new(range: ValueRange) -> Self {
        Self { range }
    }

    /// Access the range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Map a pointer x coordinate for a widget of the given width.
    ///
    /// Returns `None` when the width is not positive, since no value can be
    /// derived before the widget has been laid out.
    pub fn map(&self, x: f64, width: f64) -> Option<f64> {
        if width.is_nan() || width <= 0.0 {
            return None;
        }
        Some(map(x, width, self.range.min(), self.range.max()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_unit_range() {
        assert_eq!(map(100.0, 200.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn clamps_outside_widget() {
        assert_eq!(map(-5.0, 200.0, 0.0, 10.0), 0.0);
        assert_eq!(map(500.0, 200.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn nonzero_min_is_biased_by_max_scaling() {
        // Half way across maps to max / 2, not the midpoint of [2, 10].
        assert_eq!(map(100.0, 200.0, 2.0, 10.0), 5.0);
        assert_eq!(map(0.0, 200.0, 2.0, 10.0), 2.0);
    }

    #[test]
    fn mapper_needs_positive_width() {
        let mapper = ValueMapper::new(ValueRange::new(0.0, 10.0).unwrap());
        assert_eq!(mapper.map(40.0, 0.0), None);
        assert_eq!(mapper.map(40.0, -3.0), None);
        assert_eq!(mapper.map(40.0, 200.0), Some(2.0));
    }
}
