//! Synchronous current-value broadcast.
//!
//! [`ValueStream`] holds a scalar and fans every publication out to its
//! observers on the caller's thread, in subscription order. New observers
//! receive the current value as soon as they attach.
//!
//! Delivery iterates over a snapshot of the observer list, so observers may
//! subscribe, cancel or publish from inside a callback. A publish from inside
//! a callback is dispatched immediately (nested), before the outer delivery
//! resumes with the remaining observers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn(f64)>;

/// Identifier of an observer within one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct ObserverSlot {
    id: SubscriberId,
    live: Rc<Cell<bool>>,
    observer: Observer,
}

struct StreamState {
    value: Cell<f64>,
    next_id: Cell<u64>,
    slots: RefCell<Vec<ObserverSlot>>,
}

impl StreamState {
    fn subscribe(self: &Rc<Self>, observer: Observer) -> Subscription {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        let live = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(ObserverSlot {
            id,
            live: Rc::clone(&live),
            observer: Rc::clone(&observer),
        });
        tracing::trace!(subscriber = id.0, "value stream subscriber attached");

        observer(self.value.get());

        Subscription {
            id,
            live,
            state: Rc::downgrade(self),
        }
    }

    fn remove(&self, id: SubscriberId) {
        self.slots.borrow_mut().retain(|slot| slot.id != id);
    }
}

/// Broadcast channel for the slider's current value.
pub struct ValueStream {
    state: Rc<StreamState>,
}

impl ValueStream {
    /// Create a stream holding `initial` with no observers.
    pub fn new(initial: f64) -> Self {
        Self {
            state: Rc::new(StreamState {
                value: Cell::new(initial),
                next_id: Cell::new(1),
                slots: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Last stored value.
    pub fn value(&self) -> f64 {
        self.state.value.get()
    }

    /// Store `value` and notify every live observer.
    ///
    /// Equal values are published again; there is no deduplication.
    pub fn publish(&self, value: f64) {
        self.state.value.set(value);
        let snapshot: Vec<(Rc<Cell<bool>>, Observer)> = self
            .state
            .slots
            .borrow()
            .iter()
            .map(|slot| (Rc::clone(&slot.live), Rc::clone(&slot.observer)))
            .collect();
        for (live, observer) in snapshot {
            // Cancelled by an earlier observer in this same delivery.
            if live.get() {
                observer(value);
            }
        }
    }

    /// Attach an observer. It is invoked once with the current value before
    /// this call returns.
    pub fn subscribe(&self, observer: impl Fn(f64) + 'static) -> Subscription {
        self.state.subscribe(Rc::new(observer))
    }

    /// Read-only handle for outside subscribers.
    pub fn publisher(&self) -> ValuePublisher {
        ValuePublisher {
            state: Rc::clone(&self.state),
        }
    }

    /// Number of attached observers.
    pub fn subscriber_count(&self) -> usize {
        self.state.slots.borrow().len()
    }
}

impl fmt::Debug for ValueStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStream")
            .field("value", &self.value())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Subscribe-only view of a [`ValueStream`].
///
/// The handle clones cheaply. It cannot publish.
#[derive(Clone)]
pub struct ValuePublisher {
    state: Rc<StreamState>,
}

impl ValuePublisher {
    /// Last published value.
    pub fn value(&self) -> f64 {
        self.state.value.get()
    }

    /// Attach an observer; see [`ValueStream::subscribe`].
    pub fn subscribe(&self, observer: impl Fn(f64) + 'static) -> Subscription {
        self.state.subscribe(Rc::new(observer))
    }
}

impl fmt::Debug for ValuePublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuePublisher")
            .field("value", &self.value())
            .finish()
    }
}

/// Cancellation handle returned by `subscribe`.
///
/// Dropping the handle cancels the subscription.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    id: SubscriberId,
    live: Rc<Cell<bool>>,
    state: Weak<StreamState>,
}

impl Subscription {
    /// Identifier of this observer.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Whether the observer still receives publications.
    pub fn is_active(&self) -> bool {
        self.live.get() && self.state.strong_count() > 0
    }

    /// Stop delivery to this observer. Calling it again is a no-op.
    pub fn cancel(&self) {
        if !self.live.replace(false) {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            state.remove(self.id);
            tracing::trace!(subscriber = self.id.0, "value stream subscriber cancelled");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
