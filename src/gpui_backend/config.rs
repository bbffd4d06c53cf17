use crate::render::Color;

/// Configuration for the GPUI slider view.
#[derive(Debug, Clone)]
pub struct SliderViewConfig {
    /// Background fill behind the bars.
    pub background: Color,
    /// Corner radius of each bar in pixels.
    pub corner_radius: f32,
}

impl Default for SliderViewConfig {
    fn default() -> Self {
        Self {
            background: Color::new(0.0, 0.0, 0.0, 0.0),
            corner_radius: 0.0,
        }
    }
}
