//! Configuration errors.
//!
//! Only construction can fail. The pointer path drops bad input silently
//! and never returns these.

use thiserror::Error;

/// Errors raised while building or validating a slider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field was NaN or infinite.
    #[error("`{field}` must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The range bounds are not strictly ordered.
    #[error("minimum value {min} must be less than maximum value {max}")]
    InvalidRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `floor(max)` is zero, so the magnifier center cannot be computed.
    #[error("maximum value {max} truncates to zero; the magnifier needs an integer part")]
    ZeroMagnifierDivisor {
        /// Configured maximum.
        max: f64,
    },
    /// The slider needs at least one bar.
    #[error("number of lines must be at least 1")]
    NoLines,
    /// A color string could not be parsed.
    #[error("invalid color `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    /// The declarative description was not valid JSON for a slider.
    #[error("failed to parse slider description: {0}")]
    Parse(#[from] serde_json::Error),
}
