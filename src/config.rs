//! Slider configuration and its declarative form.
//!
//! A [`SliderConfig`] is fixed once a controller is built. The serialized
//! form mirrors the editable fields of a view description:
//!
//! ```json
//! { "minValue": 0, "maxValue": 10, "numberOfLines": 100,
//!   "initialValue": 2.5, "lineColor": "#202020" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::range::ValueRange;
use crate::render::Color;

/// Default number of bars.
pub const DEFAULT_NUMBER_OF_LINES: usize = 100;

/// Immutable slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SliderConfig {
    /// Lower bound of the value range.
    pub min_value: f64,
    /// Upper bound of the value range.
    pub max_value: f64,
    /// Number of bars, at least one.
    pub number_of_lines: usize,
    /// Value published at construction. Not clamped into the range.
    pub initial_value: f64,
    /// Bar fill color.
    pub line_color: Color,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            number_of_lines: DEFAULT_NUMBER_OF_LINES,
            initial_value: 0.0,
            line_color: Color::BLACK,
        }
    }
}

impl SliderConfig {
    /// Create a configuration for a range, keeping the other defaults.
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            ..Self::default()
        }
    }

    /// Parse and validate a declarative JSON description.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to the declarative JSON form.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration and return its value range.
    pub fn validate(&self) -> Result<ValueRange, ConfigError> {
        let range = ValueRange::new(self.min_value, self.max_value)?;
        range.center_divisor()?;
        if self.number_of_lines == 0 {
            return Err(ConfigError::NoLines);
        }
        if !self.initial_value.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "initialValue",
            });
        }
        Ok(range)
    }
}
