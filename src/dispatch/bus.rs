//! Event bus abstraction and the best-effort dispatcher.

use std::io::Write;
use std::sync::{Arc, Mutex, Weak};

use serde::Serialize;

use super::event::{OutboundEvent, Payload, EVENT_NAME};
use crate::domain::Result;

/// Receiver of outbound events, implemented by the host.
///
/// Emission is fire-and-forget: implementations handle (and log) their own
/// failures.
pub trait EventBus {
    /// Delivers one event under `event_name`.
    fn emit(&self, event_name: &str, event: &OutboundEvent);
}

/// Forwards events to a weakly held [`EventBus`].
///
/// Dispatch is synchronous and ordered. If no bus is attached, or the attached
/// bus has been dropped, events are discarded.
#[derive(Default)]
pub struct Dispatcher {
    bus: Option<Weak<dyn EventBus>>,
}

impl Dispatcher {
    /// Creates a dispatcher with no bus attached.
    #[must_use]
    pub fn new() -> Self {
        Self { bus: None }
    }

    /// Attaches `bus`, replacing any previous one. The dispatcher does not keep
    /// the bus alive.
    pub fn attach<B: EventBus + 'static>(&mut self, bus: &Arc<B>) {
        let weak: Weak<B> = Arc::downgrade(bus);
        self.bus = Some(weak);
    }

    pub fn detach(&mut self) {
        self.bus = None;
    }

    /// Returns `true` if a bus is attached and still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.bus.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Forwards one event. Returns `false` if it was dropped.
    pub fn dispatch(&self, event: &OutboundEvent) -> bool {
        let Some(bus) = self.bus.as_ref().and_then(|weak| weak.upgrade()) else {
            tracing::trace!(event_type = event.event_type, "no event bus, dropping event");
            return false;
        };

        tracing::debug!(
            event_type = event.event_type,
            event_key_action = event.event_key_action,
            target = %event.target,
            "dispatching event"
        );
        bus.emit(EVENT_NAME, event);
        true
    }

    /// Forwards events in order and returns how many were delivered.
    pub fn dispatch_all(&self, events: &[OutboundEvent]) -> usize {
        events.iter().filter(|event| self.dispatch(event)).count()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Bus that keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingBus {
    events: Mutex<Vec<(String, OutboundEvent)>>,
}

impl RecordingBus {
    /// Snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<OutboundEvent> {
        self.events
            .lock()
            .map(|events| events.iter().map(|(_, event)| *event).collect())
            .unwrap_or_default()
    }

    /// Snapshot of the event names each event was emitted under.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|events| events.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl EventBus for RecordingBus {
    fn emit(&self, event_name: &str, event: &OutboundEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push((event_name.to_string(), *event));
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    event: &'a str,
    payload: Payload,
}

/// Bus that writes each event as one JSON document per line.
///
/// ```text
/// {"event":"onHWKeyEvent","payload":{"eventType":"up","eventKeyAction":1,"tag":4,"target":4}}
/// ```
#[derive(Debug)]
pub struct JsonLinesBus<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLinesBus<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Writes one event line and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn write_event(&self, event_name: &str, event: &OutboundEvent) -> Result<()> {
        let line = serde_json::to_string(&Envelope {
            event: event_name,
            payload: event.payload(),
        })?;

        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    /// Consumes the bus and returns the writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> EventBus for JsonLinesBus<W> {
    fn emit(&self, event_name: &str, event: &OutboundEvent) {
        if let Err(e) = self.write_event(event_name, event) {
            tracing::warn!(error = %e, event_type = event.event_type, "failed to write event");
        }
    }
}
