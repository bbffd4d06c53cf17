use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use gpui::prelude::*;
use gpui::{
    DispatchPhase, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Window, canvas, div,
};

use crate::config::SliderConfig;
use crate::controller::{SliderBuilder, SliderController};
use crate::error::ConfigError;
use crate::interaction::InteractionState;
use crate::render::BarStates;

use super::config::SliderViewConfig;
use super::paint::{paint_frame, to_hsla, to_screen_rect};
use super::state::{SliderUiState, build_frame, drag_moved, drag_released};

/// A GPUI view that renders a line-stack slider.
///
/// The view paints bars from the animation state recorded by the
/// controller and drives the controller with left-button mouse input.
pub struct GpuiSliderView {
    controller: Rc<SliderController>,
    bars: BarStates,
    state: Rc<RefCell<SliderUiState>>,
    config: SliderViewConfig,
}

impl GpuiSliderView {
    /// Build a view from a programmatic slider builder.
    pub fn new(builder: SliderBuilder) -> Result<Self, ConfigError> {
        let bars = BarStates::new();
        let controller = builder.build(bars.clone())?;
        Ok(Self::with_controller(controller, bars))
    }

    /// Build a view from a declarative configuration.
    pub fn from_config(config: SliderConfig) -> Result<Self, ConfigError> {
        let bars = BarStates::new();
        let controller = SliderController::from_config(config, bars.clone())?;
        Ok(Self::with_controller(controller, bars))
    }

    fn with_controller(controller: SliderController, bars: BarStates) -> Self {
        Self {
            controller: Rc::new(controller),
            bars,
            state: Rc::new(RefCell::new(SliderUiState::default())),
            config: SliderViewConfig::default(),
        }
    }

    /// Replace the view configuration.
    pub fn with_view_config(mut self, config: SliderViewConfig) -> Self {
        self.config = config;
        self
    }

    /// Access the slider controller, e.g. to subscribe to its values.
    pub fn controller(&self) -> &SliderController {
        &self.controller
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let Some(x) = self.state.borrow().local_x(f32::from(ev.position.x)) else {
            return;
        };
        self.controller.on_pointer_began(x);
        cx.notify();
    }
}

/// Listen at window level while a drag is in progress, so moves and the
/// release are seen even after the pointer leaves the slider.
fn capture_drag(
    controller: &Rc<SliderController>,
    state: &Rc<RefCell<SliderUiState>>,
    window: &mut Window,
) {
    if controller.interaction_state() != InteractionState::Tracking {
        return;
    }
    window.on_mouse_event({
        let controller = Rc::clone(controller);
        let state = Rc::clone(state);
        move |ev: &MouseMoveEvent, phase, window, _| {
            if phase != DispatchPhase::Bubble {
                return;
            }
            let left_pressed = ev.pressed_button == Some(MouseButton::Left);
            if drag_moved(&controller, &state.borrow(), f32::from(ev.position.x), left_pressed) {
                window.refresh();
            }
        }
    });
    window.on_mouse_event({
        let controller = Rc::clone(controller);
        move |ev: &MouseUpEvent, phase, window, _| {
            if phase != DispatchPhase::Bubble || ev.button != MouseButton::Left {
                return;
            }
            if drag_released(&controller) {
                window.refresh();
            }
        }
    });
}

impl Render for GpuiSliderView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let controller = Rc::clone(&self.controller);
        let state = Rc::clone(&self.state);
        let paint_controller = Rc::clone(&self.controller);
        let paint_state = Rc::clone(&self.state);
        let bars = self.bars.clone();
        let corner_radius = self.config.corner_radius;

        div()
            .size_full()
            .bg(to_hsla(self.config.background))
            .child(
                canvas(
                    move |bounds, _window, _| {
                        let rect = to_screen_rect(bounds);
                        state.borrow_mut().bounds = Some(rect);
                        controller.set_width(rect.width());
                        build_frame(&bars, rect, Instant::now())
                    },
                    move |_, frame, window, _| {
                        paint_frame(&frame, corner_radius, window);
                        capture_drag(&paint_controller, &paint_state, window);
                        if frame.animating {
                            window.request_animation_frame();
                        }
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
    }
}
