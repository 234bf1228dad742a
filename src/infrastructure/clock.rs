//! Monotonic time sources.
//!
//! Press classification only ever compares two readings from the same clock, so
//! the epoch is irrelevant. [`MonotonicClock`] counts from its own creation.

use std::cell::Cell;
use std::time::Instant;

use crate::domain::Millis;

/// A monotonic millisecond time source.
pub trait Clock {
    /// Current reading in milliseconds. Never decreases.
    fn now_millis(&self) -> Millis;
}

/// Wall-clock-monotonic time backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> Millis {
        Millis::try_from(self.origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }
}

/// A clock that only moves when told to.
///
/// Used by the replay host for scripted timestamps, and by tests.
///
/// # Example
///
/// ```
/// use remote_input::infrastructure::{Clock, ManualClock};
///
/// let clock = ManualClock::new(100);
/// clock.advance(250);
/// assert_eq!(clock.now_millis(), 350);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(start: Millis) -> Self {
        Self { now: Cell::new(start) }
    }

    /// Jumps to `time`. Earlier values are ignored to keep the clock monotonic.
    pub fn set(&self, time: Millis) {
        if time > self.now.get() {
            self.now.set(time);
        }
    }

    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get().saturating_add(delta));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> Millis {
        (**self).now_millis()
    }
}
