//! Value ranges.

use crate::error::ConfigError;

/// Inclusive value range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Create a range, rejecting non-finite or unordered bounds.
    ///
    /// Unlike a plot range the bounds are never swapped: an inverted slider
    /// range is a caller bug.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() {
            return Err(ConfigError::NonFinite { field: "minValue" });
        }
        if !max.is_finite() {
            return Err(ConfigError::NonFinite { field: "maxValue" });
        }
        if min >= max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        self.min.max(self.max.min(value))
    }

    /// Integer divisor used to locate the magnifier center, `floor(max)`.
    pub fn center_divisor(&self) -> Result<i64, ConfigError> {
        let divisor = self.max.floor() as i64;
        if divisor == 0 {
            return Err(ConfigError::ZeroMagnifierDivisor { max: self.max });
        }
        Ok(divisor)
    }
}
