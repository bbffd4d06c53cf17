//! Bar layout inside the widget bounds.

use crate::geom::{ScreenPoint, ScreenRect};

/// Width of one bar: half of an equal share of the widget width.
pub fn bar_width(width: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    width / (2 * count) as f32
}

/// Unscaled bar rectangles, distributed with equal spacing.
///
/// The first bar sits flush with the left edge and the last one flush with
/// the right edge. Bars span the full height of `bounds`.
pub fn bar_rects(bounds: ScreenRect, count: usize) -> Vec<ScreenRect> {
    if count == 0 || !bounds.is_valid() {
        return Vec::new();
    }
    let bar = bar_width(bounds.width(), count);
    let gap = if count > 1 {
        (bounds.width() - bar * count as f32) / (count - 1) as f32
    } else {
        0.0
    };
    (0..count)
        .map(|i| {
            let x = bounds.min.x + i as f32 * (bar + gap);
            ScreenRect::from_origin_size(ScreenPoint::new(x, bounds.min.y), bar, bounds.height())
        })
        .collect()
}
