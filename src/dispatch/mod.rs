//! Outbound event construction and best-effort forwarding.
//!
//! Every semantic event leaves the crate through a [`Dispatcher`], which holds a
//! weak handle to the host's [`EventBus`]. When the host surface has been torn
//! down the handle no longer upgrades and events are dropped without error.
//!
//! ```text
//! InputHandler ──► Dispatcher ──(Weak)──► EventBus::emit("onHWKeyEvent", &event)
//! ```
//!
//! # Modules
//!
//! - `event`: [`OutboundEvent`] and its wire payload
//! - `bus`: [`EventBus`] trait, [`Dispatcher`], and the bundled bus implementations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use remote_input::dispatch::{Dispatcher, OutboundEvent, RecordingBus};
//! use remote_input::domain::ViewId;
//!
//! let bus = Arc::new(RecordingBus::default());
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.attach(&bus);
//! dispatcher.dispatch(&OutboundEvent::focus(ViewId(7)));
//! assert_eq!(bus.events().len(), 1);
//! ```

mod bus;
mod event;

pub use bus::{Dispatcher, EventBus, JsonLinesBus, RecordingBus};
pub use event::{OutboundEvent, Payload, BLUR, EVENT_NAME, FOCUS, NOT_KEYED};
