//! Application layer: the input state machine.
//!
//! This module turns host notifications into outbound events. It sits between
//! the host shim (main.rs or an embedding UI surface) and the dispatch layer.
//!
//! # Architecture
//!
//! ```text
//! Host input → Event → handle_event → State transitions → OutboundEvents → Dispatcher
//!                          │
//!                          ├── PressClassifier (short / long)
//!                          ├── keymap tables (action names)
//!                          └── FocusTracker (focus / blur)
//! ```
//!
//! [`handle_event`] is pure with respect to the outside world: it mutates only
//! the [`InputState`] it is given and returns the events to forward.
//! [`InputHandler`] owns that state together with the clock, the key-down
//! toggle and the dispatcher.
//!
//! # Modules
//!
//! - [`focus`]: Focus tracker producing blur/focus pairs
//! - [`handler`]: Event type and the state transition function
//! - [`input_handler`]: Stateful orchestrator used by hosts
//! - [`press`]: Two-state short/long press classifier
//! - [`state`]: Per-surface state container
//!
//! # Example
//!
//! ```rust
//! use remote_input::app::{handle_event, Event, InputState};
//! use remote_input::domain::{KeyAction, ViewId};
//! use remote_input::keymap::codes;
//!
//! let mut state = InputState::default();
//! handle_event(&mut state, &Event::FocusChanged(ViewId(3)), false)?;
//! let events = handle_event(
//!     &mut state,
//!     &Event::Key { key_code: codes::DPAD_LEFT, action: KeyAction::Up, time: 10 },
//!     false,
//! )?;
//! assert_eq!(events[0].event_type, "left");
//! assert_eq!(events[0].target, ViewId(3));
//! # Ok::<(), remote_input::InputError>(())
//! ```

pub mod focus;
pub mod handler;
pub mod input_handler;
pub mod press;
pub mod state;

pub use focus::FocusTracker;
pub use handler::{handle_event, should_dispatch, Event};
pub use input_handler::InputHandler;
pub use press::{Classification, PressClassifier, PressState, DEFAULT_LONG_PRESS_THRESHOLD_MS};
pub use state::InputState;
