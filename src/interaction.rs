//! Pointer interaction state machine.
//!
//! Backends translate their native events into [`PointerEvent`]s. The
//! slider only tracks whether a pointer is down; there is no hover state and
//! no inertia.

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer went down.
    Began,
    /// Pointer moved.
    Moved,
    /// Pointer was released.
    Ended,
    /// The platform cancelled the gesture.
    Cancelled,
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// X position of each active touch. Only the first one is used.
    pub touches: Vec<f32>,
}

impl PointerEvent {
    /// Single-touch pointer down.
    pub fn began(x: f32) -> Self {
        Self {
            phase: PointerPhase::Began,
            touches: vec![x],
        }
    }

    /// Single-touch pointer move.
    pub fn moved(x: f32) -> Self {
        Self {
            phase: PointerPhase::Moved,
            touches: vec![x],
        }
    }

    /// Pointer release.
    pub fn ended() -> Self {
        Self {
            phase: PointerPhase::Ended,
            touches: Vec::new(),
        }
    }

    /// Gesture cancellation.
    pub fn cancelled() -> Self {
        Self {
            phase: PointerPhase::Cancelled,
            touches: Vec::new(),
        }
    }

    /// The touch that drives the slider.
    pub fn primary_x(&self) -> Option<f32> {
        self.touches.first().copied()
    }
}

/// Interaction state of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No active pointer.
    #[default]
    Idle,
    /// Pointer is down and movements are accepted.
    Tracking,
}

impl InteractionState {
    /// Advance the state machine.
    ///
    /// Returns the next state and, when the event should update the value,
    /// the pointer x coordinate to map. Began or moved events without any
    /// touch are dropped and leave the state unchanged.
    pub fn transition(self, event: &PointerEvent) -> (Self, Option<f32>) {
        match (self, event.phase) {
            (_, PointerPhase::Began) => match event.primary_x() {
                Some(x) => (Self::Tracking, Some(x)),
                None => (self, None),
            },
            (Self::Tracking, PointerPhase::Moved) => (self, event.primary_x()),
            (Self::Idle, PointerPhase::Moved) => (self, None),
            (_, PointerPhase::Ended | PointerPhase::Cancelled) => (Self::Idle, None),
        }
    }
}
