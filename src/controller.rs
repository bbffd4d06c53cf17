//! Slider controller.
//!
//! The controller owns the value stream and the bar handles. Pointer events
//! are mapped into values and published; an internal observer forwards every
//! publication to the `on_value_changed` callback and re-applies the
//! magnifier to the bars.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::interaction::{InteractionState, PointerEvent};
use crate::magnifier::{IDENTITY_SCALE, MagnifierPolicy};
use crate::mapper::ValueMapper;
use crate::range::ValueRange;
use crate::render::{BarRenderer, BarTransform, Color};
use crate::stream::{Subscription, ValuePublisher, ValueStream};

/// Duration of the bar transform animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(200);

type ValueCallback = Rc<dyn Fn(f64)>;

/// Controller-side handle of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    scale: f64,
}

impl Bar {
    /// Scale last requested for this bar.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            scale: IDENTITY_SCALE,
        }
    }
}

struct ControllerState {
    config: SliderConfig,
    mapper: ValueMapper,
    divisor: i64,
    policy: MagnifierPolicy,
    stream: ValueStream,
    bars: RefCell<Vec<Bar>>,
    renderer: RefCell<Box<dyn BarRenderer>>,
    on_value_changed: RefCell<Option<ValueCallback>>,
    width: Cell<Option<f32>>,
    interaction: Cell<InteractionState>,
    subscription: RefCell<Option<Subscription>>,
}

impl ControllerState {
    fn on_published(&self, value: f64) {
        let callback = self.on_value_changed.borrow().clone();
        if let Some(callback) = callback {
            callback(value);
        }
        // The callback may have published again; show the latest value.
        self.apply_magnifier(self.stream.value());
    }

    fn apply_magnifier(&self, value: f64) {
        let window = self
            .policy
            .window(value, self.config.number_of_lines, self.divisor);
        let (Ok(mut bars), Ok(mut renderer)) =
            (self.bars.try_borrow_mut(), self.renderer.try_borrow_mut())
        else {
            tracing::debug!(value, "bar update re-entered from the renderer, skipping");
            return;
        };
        for (index, bar) in bars.iter_mut().enumerate() {
            bar.scale = window.scale_for(index);
            renderer.apply_transform(index, BarTransform::uniform(bar.scale), ANIMATION_DURATION);
        }
    }
}

/// Interactive line-stack slider.
///
/// All methods take `&self`; the controller is meant to be driven from a
/// single UI thread, and callbacks may call back into it.
pub struct SliderController {
    state: Rc<ControllerState>,
}

impl SliderController {
    /// Start building a slider programmatically.
    pub fn builder() -> SliderBuilder {
        SliderBuilder::default()
    }

    /// Build a slider from a declarative configuration.
    ///
    /// No value callback is installed; use
    /// [`set_on_value_changed`](Self::set_on_value_changed) or the publisher.
    pub fn from_config(
        config: SliderConfig,
        renderer: impl BarRenderer + 'static,
    ) -> Result<Self, ConfigError> {
        Self::build(config, Box::new(renderer), None)
    }

    fn build(
        config: SliderConfig,
        renderer: Box<dyn BarRenderer>,
        on_value_changed: Option<ValueCallback>,
    ) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        let divisor = range.center_divisor()?;
        // The initial value is stored before setup, so the observer replay
        // delivers it exactly once.
        let stream = ValueStream::new(config.initial_value);
        let controller = Self {
            state: Rc::new(ControllerState {
                mapper: ValueMapper::new(range),
                divisor,
                policy: MagnifierPolicy::default(),
                stream,
                bars: RefCell::new(Vec::new()),
                renderer: RefCell::new(renderer),
                on_value_changed: RefCell::new(on_value_changed),
                width: Cell::new(None),
                interaction: Cell::new(InteractionState::Idle),
                subscription: RefCell::new(None),
                config,
            }),
        };
        controller.setup();
        Ok(controller)
    }

    /// Create the bars and attach the internal observer.
    ///
    /// Runs during construction. Calling it again, for example after a host
    /// reloads its view description, does nothing.
    pub fn setup(&self) {
        let state = &self.state;
        if state.subscription.borrow().is_some() {
            tracing::debug!("slider setup already ran");
            return;
        }
        let count = state.config.number_of_lines;
        state
            .renderer
            .borrow_mut()
            .create_bars(count, state.config.line_color);
        *state.bars.borrow_mut() = vec![Bar::default(); count];
        tracing::debug!(
            lines = count,
            min = state.config.min_value,
            max = state.config.max_value,
            initial = state.config.initial_value,
            "slider setup"
        );

        let weak = Rc::downgrade(state);
        let subscription = state.stream.subscribe(move |value| {
            if let Some(state) = weak.upgrade() {
                state.on_published(value);
            }
        });
        *state.subscription.borrow_mut() = Some(subscription);
    }

    /// Current value.
    pub fn current_value(&self) -> f64 {
        self.state.stream.value()
    }

    /// Subscribable stream of values. New subscribers get the current value
    /// immediately.
    pub fn current_value_publisher(&self) -> ValuePublisher {
        self.state.stream.publisher()
    }

    /// Install the value callback, replacing any previous one.
    pub fn set_on_value_changed(&self, callback: impl Fn(f64) + 'static) {
        *self.state.on_value_changed.borrow_mut() = Some(Rc::new(callback));
    }

    /// Remove the value callback.
    pub fn clear_on_value_changed(&self) {
        self.state.on_value_changed.borrow_mut().take();
    }

    /// Record the laid-out widget width in pixels.
    pub fn set_width(&self, width: f32) {
        self.state.width.set(Some(width));
    }

    /// Last reported widget width.
    pub fn width(&self) -> Option<f32> {
        self.state.width.get()
    }

    /// Feed a pointer event through the interaction state machine.
    pub fn handle_pointer(&self, event: &PointerEvent) {
        let current = self.state.interaction.get();
        let (next, x) = current.transition(event);
        if next != current {
            tracing::trace!(from = ?current, to = ?next, "slider interaction state");
        }
        self.state.interaction.set(next);
        match x {
            Some(x) => self.handle(x),
            None => tracing::trace!(phase = ?event.phase, "pointer event produced no value"),
        }
    }

    /// Pointer went down at widget-local `x`.
    pub fn on_pointer_began(&self, x: f32) {
        self.handle_pointer(&PointerEvent::began(x));
    }

    /// Pointer moved to widget-local `x`.
    pub fn on_pointer_moved(&self, x: f32) {
        self.handle_pointer(&PointerEvent::moved(x));
    }

    /// Pointer was released.
    pub fn on_pointer_ended(&self) {
        self.handle_pointer(&PointerEvent::ended());
    }

    /// Gesture was cancelled by the platform.
    pub fn on_pointer_cancelled(&self) {
        self.handle_pointer(&PointerEvent::cancelled());
    }

    fn handle(&self, x: f32) {
        let Some(width) = self.state.width.get() else {
            tracing::debug!(x, "pointer event before layout, dropping");
            return;
        };
        let Some(value) = self.state.mapper.map(x as f64, width as f64) else {
            tracing::debug!(x, width, "pointer event with empty width, dropping");
            return;
        };
        tracing::trace!(x, width, value, "slider value from pointer");
        self.state.stream.publish(value);
    }

    /// Interaction state.
    pub fn interaction_state(&self) -> InteractionState {
        self.state.interaction.get()
    }

    /// Scale of each bar, indexed like the bars.
    pub fn bar_scales(&self) -> Vec<f64> {
        self.state.bars.borrow().iter().map(Bar::scale).collect()
    }

    /// Number of bars.
    pub fn bar_count(&self) -> usize {
        self.state.config.number_of_lines
    }

    /// Bar fill color.
    pub fn line_color(&self) -> Color {
        self.state.config.line_color
    }

    /// Value range.
    pub fn range(&self) -> ValueRange {
        self.state.mapper.range()
    }

    /// Configuration the slider was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.state.config
    }
}

impl Drop for SliderController {
    fn drop(&mut self) {
        // Outside publisher handles may keep the stream alive.
        if let Ok(mut subscription) = self.state.subscription.try_borrow_mut() {
            drop(subscription.take());
        }
    }
}

impl fmt::Debug for SliderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderController")
            .field("config", &self.state.config)
            .field("value", &self.current_value())
            .field("width", &self.state.width.get())
            .field("interaction", &self.state.interaction.get())
            .finish()
    }
}

/// Builder for [`SliderController`].
#[derive(Default)]
pub struct SliderBuilder {
    config: SliderConfig,
    on_value_changed: Option<ValueCallback>,
}

impl SliderBuilder {
    /// Set the value range.
    pub fn range(mut self, min_value: f64, max_value: f64) -> Self {
        self.config.min_value = min_value;
        self.config.max_value = max_value;
        self
    }

    /// Set the initial value. It is published as-is, without clamping.
    pub fn initial_value(mut self, value: f64) -> Self {
        self.config.initial_value = value;
        self
    }

    /// Set the number of bars.
    pub fn number_of_lines(mut self, count: usize) -> Self {
        self.config.number_of_lines = count;
        self
    }

    /// Set the bar color.
    pub fn line_color(mut self, color: Color) -> Self {
        self.config.line_color = color;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the callback invoked on every published value.
    pub fn on_value_changed(mut self, callback: impl Fn(f64) + 'static) -> Self {
        self.on_value_changed = Some(Rc::new(callback));
        self
    }

    /// Validate the configuration and build the controller.
    pub fn build(
        self,
        renderer: impl BarRenderer + 'static,
    ) -> Result<SliderController, ConfigError> {
        SliderController::build(self.config, Box::new(renderer), self.on_value_changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BarStates;

    fn slider(min: f64, max: f64, lines: usize) -> (SliderController, BarStates) {
        let bars = BarStates::new();
        let controller = SliderController::builder()
            .range(min, max)
            .number_of_lines(lines)
            .build(bars.clone())
            .unwrap();
        controller.set_width(200.0);
        (controller, bars)
    }

    #[test]
    fn setup_is_idempotent() {
        let (controller, bars) = slider(0.0, 10.0, 20);
        controller.setup();
        controller.setup();
        assert_eq!(bars.len(), 20);
        assert_eq!(controller.bar_scales().len(), 20);
        assert_eq!(controller.current_value_publisher().value(), 0.0);
    }

    #[test]
    fn drops_pointer_before_layout() {
        let controller = SliderController::builder()
            .range(0.0, 10.0)
            .initial_value(3.0)
            .build(BarStates::new())
            .unwrap();
        controller.on_pointer_began(50.0);
        assert_eq!(controller.current_value(), 3.0);
        assert_eq!(controller.interaction_state(), InteractionState::Tracking);
    }

    #[test]
    fn moves_only_count_while_tracking() {
        let (controller, _) = slider(0.0, 10.0, 100);
        controller.on_pointer_moved(100.0);
        assert_eq!(controller.current_value(), 0.0);

        controller.on_pointer_began(40.0);
        assert_eq!(controller.current_value(), 2.0);
        controller.on_pointer_moved(100.0);
        assert_eq!(controller.current_value(), 5.0);

        controller.on_pointer_ended();
        controller.on_pointer_moved(200.0);
        assert_eq!(controller.current_value(), 5.0);
    }

    #[test]
    fn renderer_tracks_bar_scales() {
        let (controller, bars) = slider(0.0, 10.0, 100);
        controller.on_pointer_began(40.0);
        assert_eq!(bars.target(18), Some(BarTransform::uniform(1.6)));
        assert_eq!(bars.target(21), Some(BarTransform::IDENTITY));
        assert_eq!(controller.bar_scales()[18], 1.6);
    }

    #[test]
    fn dropping_controller_detaches_internal_observer() {
        let (controller, _) = slider(0.0, 10.0, 10);
        let publisher = controller.current_value_publisher();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        controller.set_on_value_changed(move |_| counter.set(counter.get() + 1));
        controller.on_pointer_began(10.0);
        assert_eq!(calls.get(), 1);

        drop(controller);
        let seen = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&seen);
        let _sub = publisher.subscribe(move |v| sink.set(v));
        assert_eq!(seen.get(), 0.5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(
            SliderController::builder().range(5.0, 1.0).build(BarStates::new()),
            Err(ConfigError::InvalidRange { .. })
        ));
        assert!(matches!(
            SliderController::builder()
                .range(0.0, 0.5)
                .build(BarStates::new()),
            Err(ConfigError::ZeroMagnifierDivisor { .. })
        ));
    }
}
