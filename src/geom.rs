//! Geometric primitives in widget-local pixel space.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self {
            min: origin,
            max: ScreenPoint::new(origin.x + width, origin.y + height),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Rectangle center.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Scale the rectangle about its center.
    pub fn scaled(&self, scale_x: f32, scale_y: f32) -> Self {
        let center = self.center();
        let half_w = self.width() * 0.5 * scale_x;
        let half_h = self.height() * 0.5 * scale_y;
        Self {
            min: ScreenPoint::new(center.x - half_w, center.y - half_h),
            max: ScreenPoint::new(center.x + half_w, center.y + half_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_keeps_center() {
        let rect = ScreenRect::new(ScreenPoint::new(10.0, 0.0), ScreenPoint::new(14.0, 20.0));
        let scaled = rect.scaled(1.5, 1.5);
        assert_eq!(scaled.center(), rect.center());
        assert!((scaled.width() - 6.0).abs() < 1e-6);
        assert!((scaled.height() - 30.0).abs() < 1e-6);
    }
}
