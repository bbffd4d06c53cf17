//! Rendering collaborator interface.
//!
//! The slider core never draws. It asks a [`BarRenderer`] to create bars once
//! and to animate bar transforms afterwards. Backends (such as the GPUI
//! backend) implement or wrap this trait.

mod bars;
mod layout;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use bars::BarStates;
pub use layout::{bar_rects, bar_width};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        // `from_str_radix` would accept a leading sign.
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| -> Result<f32, ConfigError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgba(RgbaRepr),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RgbaRepr {
    r: f32,
    g: f32,
    b: f32,
    #[serde(default = "opaque")]
    a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ConfigError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => Color::from_hex(&hex),
            ColorRepr::Rgba(RgbaRepr { r, g, b, a }) => {
                let in_unit = |v: f32| (0.0..=1.0).contains(&v);
                if [r, g, b, a].into_iter().all(in_unit) {
                    Ok(Color::new(r, g, b, a))
                } else {
                    Err(ConfigError::InvalidColor(format!("rgba({r}, {g}, {b}, {a})")))
                }
            }
        }
    }
}

/// Scale transform requested for one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTransform {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
}

impl BarTransform {
    /// Identity transform.
    pub const IDENTITY: Self = Self::uniform(1.0);

    /// Same scale on both axes.
    pub const fn uniform(scale: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
        }
    }
}

impl Default for BarTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Host-side bar views consumed by the slider controller.
pub trait BarRenderer {
    /// Create `count` bars filled with `color`, indexed `0..count`.
    fn create_bars(&mut self, count: usize, color: Color);

    /// Animate bar `index` to `transform` over `duration`.
    fn apply_transform(&mut self, index: usize, transform: BarTransform, duration: Duration);
}

impl<R: BarRenderer + ?Sized> BarRenderer for Box<R> {
    fn create_bars(&mut self, count: usize, color: Color) {
        (**self).create_bars(count, color);
    }

    fn apply_transform(&mut self, index: usize, transform: BarTransform, duration: Duration) {
        (**self).apply_transform(index, transform, duration);
    }
}
