use gpui::{BorderStyle, Bounds, Corners, Edges, Pixels, Window, point, px, quad};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::Color;

use super::state::BarFrame;

pub(crate) fn paint_frame(frame: &BarFrame, corner_radius: f32, window: &mut Window) {
    let color = to_rgba(frame.color);
    for rect in &frame.rects {
        window.paint_quad(quad(
            to_bounds(*rect),
            Corners::all(px(corner_radius)),
            color,
            Edges::all(px(0.0)),
            color,
            BorderStyle::default(),
        ));
    }
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}

pub(crate) fn to_screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    let origin = ScreenPoint::new(f32::from(bounds.origin.x), f32::from(bounds.origin.y));
    ScreenRect::from_origin_size(
        origin,
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}
