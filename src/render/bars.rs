//! Recording bar renderer.
//!
//! [`BarStates`] keeps the latest requested transform per bar together with
//! the animation it started from. Pull-based backends read interpolated
//! transforms at paint time; headless hosts read the targets directly.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::{BarRenderer, BarTransform, Color};

#[derive(Debug, Clone, Copy)]
struct BarAnimation {
    from: BarTransform,
    to: BarTransform,
    started: Option<Instant>,
    duration: Duration,
}

impl BarAnimation {
    const REST: Self = Self {
        from: BarTransform::IDENTITY,
        to: BarTransform::IDENTITY,
        started: None,
        duration: Duration::ZERO,
    };

    fn progress(&self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn at(&self, now: Instant) -> BarTransform {
        let t = ease_out(self.progress(now));
        BarTransform {
            scale_x: lerp(self.from.scale_x, self.to.scale_x, t),
            scale_y: lerp(self.from.scale_y, self.to.scale_y, t),
        }
    }
}

#[derive(Debug, Default)]
struct BarStatesInner {
    color: Color,
    bars: Vec<BarAnimation>,
}

/// Shared per-bar transform state.
///
/// Clones share the same bars, so one clone can be handed to the slider
/// controller while another is read by the painter.
#[derive(Debug, Clone, Default)]
pub struct BarStates {
    inner: Rc<RefCell<BarStatesInner>>,
}

impl BarStates {
    /// Create an empty bar set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bars created so far.
    pub fn len(&self) -> usize {
        self.inner.borrow().bars.len()
    }

    /// Whether no bars exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bar fill color.
    pub fn color(&self) -> Color {
        self.inner.borrow().color
    }

    /// Final transform requested for a bar.
    pub fn target(&self, index: usize) -> Option<BarTransform> {
        self.inner.borrow().bars.get(index).map(|bar| bar.to)
    }

    /// Transform of a bar at `now`, following any running animation.
    pub fn transform_at(&self, index: usize, now: Instant) -> Option<BarTransform> {
        self.inner.borrow().bars.get(index).map(|bar| bar.at(now))
    }

    /// Transforms of every bar at `now`.
    pub fn transforms_at(&self, now: Instant) -> Vec<BarTransform> {
        self.inner.borrow().bars.iter().map(|bar| bar.at(now)).collect()
    }

    /// Whether any bar is still moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.inner
            .borrow()
            .bars
            .iter()
            .any(|bar| bar.progress(now) < 1.0)
    }

    pub(crate) fn apply_at(
        &self,
        index: usize,
        transform: BarTransform,
        duration: Duration,
        now: Instant,
    ) {
        let mut inner = self.inner.borrow_mut();
        let Some(bar) = inner.bars.get_mut(index) else {
            return;
        };
        *bar = BarAnimation {
            from: bar.at(now),
            to: transform,
            started: Some(now),
            duration,
        };
    }
}

impl BarRenderer for BarStates {
    fn create_bars(&mut self, count: usize, color: Color) {
        let mut inner = self.inner.borrow_mut();
        inner.color = color;
        inner.bars = vec![BarAnimation::REST; count];
    }

    fn apply_transform(&mut self, index: usize, transform: BarTransform, duration: Duration) {
        self.apply_at(index, transform, duration, Instant::now());
    }
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
