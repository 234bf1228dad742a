//! Stateful orchestrator owned by one UI surface.

use std::sync::Arc;

use super::handler::{handle_event, Event};
use super::state::InputState;
use crate::dispatch::{Dispatcher, EventBus, OutboundEvent};
use crate::domain::{KeyAction, KeyCode, Millis, Result, ViewId};
use crate::infrastructure::{Clock, FeatureToggle, MonotonicClock};
use crate::Config;

/// Receives raw input and focus notifications from a host surface and forwards
/// the resulting events to the attached bus.
///
/// Every method runs to completion synchronously and returns the events it
/// produced, whether or not a bus was there to receive them.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use remote_input::{Config, InputHandler};
/// use remote_input::dispatch::RecordingBus;
/// use remote_input::domain::{KeyAction, ViewId};
/// use remote_input::keymap::codes;
///
/// let bus = Arc::new(RecordingBus::default());
/// let mut handler = InputHandler::new(&Config::default());
/// handler.attach_bus(&bus);
///
/// handler.on_focus_changed(ViewId(1))?;
/// handler.handle_raw_key_event(codes::DPAD_DOWN, KeyAction::Down, 0)?;
/// handler.handle_raw_key_event(codes::DPAD_DOWN, KeyAction::Up, 120)?;
///
/// let types: Vec<_> = bus.events().iter().map(|e| e.event_type).collect();
/// assert_eq!(types, ["focus", "down"]);
/// # Ok::<(), remote_input::InputError>(())
/// ```
#[derive(Debug)]
pub struct InputHandler<C: Clock = MonotonicClock> {
    state: InputState,
    clock: C,
    key_down_events: FeatureToggle,
    dispatcher: Dispatcher,
}

impl InputHandler<MonotonicClock> {
    /// Creates a handler reading time from a [`MonotonicClock`].
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> InputHandler<C> {
    #[must_use]
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            state: InputState::new(config.long_press_threshold_ms),
            clock,
            key_down_events: FeatureToggle::new(config.enable_key_down_events),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Shares an existing toggle instead of the one created from config.
    #[must_use]
    pub fn with_key_down_toggle(mut self, toggle: FeatureToggle) -> Self {
        self.key_down_events = toggle;
        self
    }

    pub fn attach_bus<B: EventBus + 'static>(&mut self, bus: &Arc<B>) {
        self.dispatcher.attach(bus);
    }

    pub fn detach_bus(&mut self) {
        self.dispatcher.detach();
    }

    /// Handle on the key-down toggle; flipping it affects the next key event.
    #[must_use]
    pub fn key_down_toggle(&self) -> FeatureToggle {
        self.key_down_events.clone()
    }

    #[must_use]
    pub const fn state(&self) -> &InputState {
        &self.state
    }

    #[must_use]
    pub const fn focused_view(&self) -> ViewId {
        self.state.focused_view()
    }

    /// Handles a key event stamped by the caller.
    ///
    /// # Errors
    ///
    /// See [`handle_event`].
    pub fn handle_raw_key_event(
        &mut self,
        key_code: KeyCode,
        action: KeyAction,
        time: Millis,
    ) -> Result<Vec<OutboundEvent>> {
        self.process(&Event::Key {
            key_code,
            action,
            time,
        })
    }

    /// Handles a key event with a raw host action code, stamped with the
    /// handler's clock. Action codes other than down/up are ignored.
    ///
    /// # Errors
    ///
    /// See [`handle_event`].
    pub fn handle_key(&mut self, key_code: KeyCode, raw_action: i32) -> Result<Vec<OutboundEvent>> {
        let Some(action) = KeyAction::from_raw(raw_action) else {
            tracing::trace!(key_code = key_code.0, raw_action, "ignoring non press/release action");
            return Ok(Vec::new());
        };
        let time = self.clock.now_millis();
        self.handle_raw_key_event(key_code, action, time)
    }

    /// # Errors
    ///
    /// Never fails; returns `Result` for uniformity with key handling.
    pub fn on_focus_changed(&mut self, view: ViewId) -> Result<Vec<OutboundEvent>> {
        self.process(&Event::FocusChanged(view))
    }

    /// # Errors
    ///
    /// Never fails; returns `Result` for uniformity with key handling.
    pub fn on_focus_cleared(&mut self) -> Result<Vec<OutboundEvent>> {
        self.process(&Event::FocusCleared)
    }

    fn process(&mut self, event: &Event) -> Result<Vec<OutboundEvent>> {
        let events = handle_event(&mut self.state, event, self.key_down_events.is_enabled())?;
        let delivered = self.dispatcher.dispatch_all(&events);
        if delivered < events.len() {
            tracing::trace!(
                produced = events.len(),
                delivered,
                "event bus unavailable, events dropped"
            );
        }
        Ok(events)
    }
}
