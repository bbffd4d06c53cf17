//! End-to-end slider scenarios driven through the public controller API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gpui_linestack::{
    ANIMATION_DURATION, BarRenderer, BarStates, BarTransform, Color, ConfigError, PointerEvent,
    PointerPhase, SliderConfig, SliderController,
};

// ── Recording renderer ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(usize, Color),
    Apply(usize, BarTransform, Duration),
}

#[derive(Clone, Default)]
struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

impl BarRenderer for Recorder {
    fn create_bars(&mut self, count: usize, color: Color) {
        self.calls.borrow_mut().push(Call::Create(count, color));
    }

    fn apply_transform(&mut self, index: usize, transform: BarTransform, duration: Duration) {
        self.calls
            .borrow_mut()
            .push(Call::Apply(index, transform, duration));
    }
}

fn magnified(controller: &SliderController) -> Vec<(usize, f64)> {
    controller
        .bar_scales()
        .into_iter()
        .enumerate()
        .filter(|(_, scale)| *scale != 1.0)
        .collect()
}

fn slider(min: f64, max: f64, lines: usize, initial: f64) -> SliderController {
    let controller = SliderController::builder()
        .range(min, max)
        .number_of_lines(lines)
        .initial_value(initial)
        .build(BarStates::new())
        .expect("valid slider");
    controller.set_width(200.0);
    controller
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn s1_unit_range_center_is_negative() {
    let controller = slider(0.0, 1.0, 10, 0.5);
    controller.on_pointer_began(100.0);
    assert_eq!(controller.current_value(), 0.5);
    assert_eq!(magnified(&controller), vec![(0, 1.2)]);
}

#[test]
fn s2_full_magnifier_window() {
    let controller = slider(0.0, 10.0, 100, 0.0);
    controller.on_pointer_began(40.0);
    assert_eq!(controller.current_value(), 2.0);
    assert_eq!(
        magnified(&controller),
        vec![(16, 1.2), (17, 1.35), (18, 1.6), (19, 1.35), (20, 1.2)]
    );
}

#[test]
fn s3_left_of_widget_clamps_to_min() {
    let controller = slider(0.0, 10.0, 100, 4.0);
    controller.on_pointer_began(-5.0);
    assert_eq!(controller.current_value(), 0.0);
    assert_eq!(magnified(&controller), vec![(0, 1.2)]);
}

#[test]
fn s4_right_of_widget_clamps_to_max() {
    let controller = slider(0.0, 10.0, 100, 0.0);
    controller.on_pointer_began(500.0);
    assert_eq!(controller.current_value(), 10.0);
    assert_eq!(
        magnified(&controller),
        vec![(96, 1.2), (97, 1.35), (98, 1.6), (99, 1.35)]
    );
}

#[test]
fn s5_late_subscriber_gets_initial_value() {
    let controller = slider(0.0, 1.0, 10, 0.5);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = controller
        .current_value_publisher()
        .subscribe(move |v| sink.borrow_mut().push(v));
    assert_eq!(*seen.borrow(), vec![0.5]);
}

#[test]
fn s6_subscribers_complete_in_order() {
    let controller = slider(0.0, 10.0, 100, 0.0);
    let publisher = controller.current_value_publisher();
    let trace = Rc::new(RefCell::new(Vec::new()));

    let a_trace = Rc::clone(&trace);
    let _a = publisher.subscribe(move |_| {
        a_trace.borrow_mut().push("a:start");
        a_trace.borrow_mut().push("a:end");
    });
    let b_trace = Rc::clone(&trace);
    let _b = publisher.subscribe(move |_| {
        b_trace.borrow_mut().push("b:start");
        b_trace.borrow_mut().push("b:end");
    });
    trace.borrow_mut().clear();

    controller.on_pointer_began(40.0);
    assert_eq!(*trace.borrow(), vec!["a:start", "a:end", "b:start", "b:end"]);
}

// ── Controller contract ──────────────────────────────────────────────

#[test]
fn uneven_bars_per_unit_are_floored() {
    let controller = slider(0.0, 7.0, 25, 0.0);
    controller.set_width(70.0);
    controller.on_pointer_began(30.0);
    assert_eq!(controller.current_value(), 3.0);
    assert_eq!(
        magnified(&controller),
        vec![(5, 1.2), (6, 1.35), (7, 1.6), (8, 1.35), (9, 1.2)]
    );
}

#[test]
fn construction_reports_initial_value_once() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let controller = SliderController::builder()
        .range(0.0, 10.0)
        .initial_value(25.0)
        .on_value_changed(move |v| sink.borrow_mut().push(v))
        .build(BarStates::new())
        .expect("valid slider");
    // Not clamped at construction.
    assert_eq!(*calls.borrow(), vec![25.0]);
    assert_eq!(controller.current_value(), 25.0);
}

#[test]
fn callback_matches_current_value_per_event() {
    let controller = slider(0.0, 10.0, 100, 0.0);
    let publisher = controller.current_value_publisher();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    controller.set_on_value_changed(move |v| sink.borrow_mut().push((v, publisher.value())));

    let xs = [10.0, 60.0, 60.0, 400.0, -1.0];
    controller.on_pointer_began(xs[0]);
    for x in &xs[1..] {
        controller.on_pointer_moved(*x);
    }

    let calls = calls.borrow();
    assert_eq!(calls.len(), xs.len());
    for (value, current) in calls.iter() {
        assert_eq!(value, current);
    }
    assert_eq!(calls[1].0, calls[2].0);
}

#[test]
fn renderer_gets_one_request_per_bar() {
    let recorder = Recorder::default();
    let controller = SliderController::builder()
        .range(0.0, 10.0)
        .number_of_lines(30)
        .line_color(Color::WHITE)
        .build(recorder.clone())
        .expect("valid slider");
    let setup = recorder.take();
    assert_eq!(setup[0], Call::Create(30, Color::WHITE));
    assert_eq!(setup.len(), 31);

    controller.set_width(300.0);
    controller.on_pointer_began(60.0);
    let calls = recorder.take();
    assert_eq!(calls.len(), 30);
    for (index, call) in calls.iter().enumerate() {
        let Call::Apply(i, transform, duration) = call else {
            panic!("unexpected call {call:?}");
        };
        assert_eq!(*i, index);
        assert_eq!(*duration, ANIMATION_DURATION);
        assert_eq!(transform.scale_x, transform.scale_y);
    }
}

#[test]
fn zero_touch_events_are_dropped() {
    let controller = slider(0.0, 10.0, 100, 3.0);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    controller.set_on_value_changed(move |_| counter.set(counter.get() + 1));

    controller.handle_pointer(&PointerEvent {
        phase: PointerPhase::Began,
        touches: Vec::new(),
    });
    controller.on_pointer_moved(100.0);
    assert_eq!(calls.get(), 0);
    assert_eq!(controller.current_value(), 3.0);
}

#[test]
fn declarative_path_has_no_callback_and_stable_setup() {
    let bars = BarStates::new();
    let config = SliderConfig::from_json_str(
        r##"{ "minValue": 0, "maxValue": 5, "numberOfLines": 25, "initialValue": 1, "lineColor": "#336699" }"##,
    )
    .expect("valid description");
    let controller = SliderController::from_config(config, bars.clone()).expect("valid slider");
    controller.setup();

    assert_eq!(bars.len(), 25);
    assert_eq!(controller.bar_count(), 25);
    assert_eq!(controller.current_value(), 1.0);
    assert_eq!(controller.line_color(), Color::from_hex("#336699").unwrap());
    // floor(1) * floor(25 / 5) - 1 = 4; the peak sits at 3.
    assert_eq!(controller.bar_scales()[3], 1.6);
}

#[test]
fn invalid_description_fails_fast() {
    let err = SliderConfig::from_json_str(r#"{ "minValue": 3, "maxValue": 1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange { .. }));
    assert!(err.to_string().contains("must be less than"));
}

#[test]
fn callback_may_drive_the_slider_again() {
    let controller = Rc::new(slider(0.0, 10.0, 100, 0.0));
    let weak = Rc::downgrade(&controller);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.set_on_value_changed(move |v| {
        sink.borrow_mut().push(v);
        if v == 2.0 {
            if let Some(controller) = weak.upgrade() {
                controller.on_pointer_moved(100.0);
            }
        }
    });

    controller.on_pointer_began(40.0);
    assert_eq!(*seen.borrow(), vec![2.0, 5.0]);
    assert_eq!(controller.current_value(), 5.0);

    // Bars show the window for the latest value, not the outer one.
    let scales = controller.bar_scales();
    assert_eq!(scales[48], 1.6);
    assert_eq!(scales[18], 1.0);
}
