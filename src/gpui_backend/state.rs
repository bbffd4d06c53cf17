use std::time::Instant;

use crate::controller::SliderController;
use crate::geom::ScreenRect;
use crate::interaction::InteractionState;
use crate::render::{BarStates, Color, bar_rects};

#[derive(Debug, Clone, Default)]
pub(crate) struct SliderUiState {
    pub(crate) bounds: Option<ScreenRect>,
}

impl SliderUiState {
    /// Convert a window-space x coordinate into widget-local space.
    ///
    /// The result is not clipped to the widget.
    pub(crate) fn local_x(&self, window_x: f32) -> Option<f32> {
        self.bounds.map(|bounds| window_x - bounds.min.x)
    }
}

/// Feed a window-level mouse move into a drag in progress.
///
/// Returns `true` when the controller saw the event. A move without the
/// left button means the release was missed and cancels the drag.
pub(crate) fn drag_moved(
    controller: &SliderController,
    state: &SliderUiState,
    window_x: f32,
    left_pressed: bool,
) -> bool {
    if controller.interaction_state() != InteractionState::Tracking {
        return false;
    }
    if !left_pressed {
        controller.on_pointer_cancelled();
        return true;
    }
    match state.local_x(window_x) {
        Some(x) => {
            controller.on_pointer_moved(x);
            true
        }
        None => false,
    }
}

/// Finish a drag in progress, wherever the button was released.
pub(crate) fn drag_released(controller: &SliderController) -> bool {
    if controller.interaction_state() != InteractionState::Tracking {
        return false;
    }
    controller.on_pointer_ended();
    true
}

/// Bars ready to paint for one frame.
#[derive(Debug, Clone)]
pub(crate) struct BarFrame {
    pub(crate) rects: Vec<ScreenRect>,
    pub(crate) color: Color,
    pub(crate) animating: bool,
}

pub(crate) fn build_frame(bars: &BarStates, bounds: ScreenRect, now: Instant) -> BarFrame {
    let transforms = bars.transforms_at(now);
    let rects = bar_rects(bounds, transforms.len())
        .into_iter()
        .zip(transforms)
        .map(|(rect, transform)| rect.scaled(transform.scale_x as f32, transform.scale_y as f32))
        .collect();
    BarFrame {
        rects,
        color: bars.color(),
        animating: bars.is_animating(now),
    }
}
