//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for every host notification. It
//! mutates the [`InputState`] it is given and returns the outbound events in
//! the order they must be forwarded.
//!
//! # Key events
//!
//! 1. A key-down for a trackable key arms the press classifier (if idle).
//! 2. [`should_dispatch`] decides whether the event is forwarded at all: the
//!    key must be in the short-action table, and key-downs additionally need
//!    the key-down toggle.
//! 3. Key-ups are classified; a long press on a trackable key uses the
//!    long-press action. Key-downs always use the short action.
//! 4. The event targets the last focused view.

use super::press::Classification;
use super::state::InputState;
use crate::dispatch::OutboundEvent;
use crate::domain::{InputError, KeyAction, KeyCode, Millis, Result, ViewId};
use crate::keymap::{self, ActionName};

/// Notifications delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A raw key event at monotonic time `time`.
    Key {
        key_code: KeyCode,
        action: KeyAction,
        time: Millis,
    },
    /// The host moved focus to a view.
    FocusChanged(ViewId),
    /// The whole view hierarchy lost focus.
    FocusCleared,
}

/// Processes an event, mutates state, and returns the events to forward.
///
/// # Errors
///
/// Returns [`InputError::UnmappedAction`] if a key passes the dispatch gate
/// without a short-press action. The gate checks the same table, so this only
/// happens if the two disagree.
///
/// # Example
///
/// ```rust
/// use remote_input::app::{handle_event, Event, InputState};
/// use remote_input::domain::KeyAction;
/// use remote_input::keymap::codes;
///
/// let mut state = InputState::default();
/// let down = Event::Key { key_code: codes::DPAD_UP, action: KeyAction::Down, time: 0 };
/// let up = Event::Key { key_code: codes::DPAD_UP, action: KeyAction::Up, time: 1500 };
///
/// assert!(handle_event(&mut state, &down, false)?.is_empty());
/// assert_eq!(handle_event(&mut state, &up, false)?[0].event_type, "longUp");
/// # Ok::<(), remote_input::InputError>(())
/// ```
pub fn handle_event(
    state: &mut InputState,
    event: &Event,
    key_down_enabled: bool,
) -> Result<Vec<OutboundEvent>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match *event {
        Event::Key {
            key_code,
            action,
            time,
        } => Ok(handle_key(state, key_code, action, time, key_down_enabled)?
            .into_iter()
            .collect()),
        Event::FocusChanged(view) => Ok(state.focus.on_focus_changed(view)),
        Event::FocusCleared => Ok(state.focus.on_focus_cleared()),
    }
}

/// Dispatch gate: the key must be mapped, and key-downs are forwarded only
/// while `key_down_enabled` is set. Otherwise only releases activate.
#[must_use]
pub fn should_dispatch(key_code: KeyCode, action: KeyAction, key_down_enabled: bool) -> bool {
    keymap::short_action(key_code).is_some()
        && match action {
            KeyAction::Up => true,
            KeyAction::Down => key_down_enabled,
        }
}

fn handle_key(
    state: &mut InputState,
    key_code: KeyCode,
    action: KeyAction,
    time: Millis,
    key_down_enabled: bool,
) -> Result<Option<OutboundEvent>> {
    if action == KeyAction::Down {
        state.press.on_key_down(key_code, time);
    }

    if !should_dispatch(key_code, action, key_down_enabled) {
        tracing::trace!(key_code = key_code.0, action = ?action, "key event filtered");
        return Ok(None);
    }

    let name = resolve_action(state, key_code, action, time)?;
    Ok(Some(OutboundEvent::key(name, action, state.focused_view())))
}

fn resolve_action(
    state: &mut InputState,
    key_code: KeyCode,
    action: KeyAction,
    time: Millis,
) -> Result<ActionName> {
    let short = keymap::short_action(key_code).ok_or(InputError::UnmappedAction { key_code })?;

    if action == KeyAction::Down {
        return Ok(short);
    }

    match state.press.on_key_up(key_code, time) {
        Classification::Long if keymap::is_trackable(key_code) => {
            Ok(keymap::long_action(key_code).unwrap_or_else(|| {
                tracing::warn!(
                    key_code = key_code.0,
                    fallback = short,
                    "long press without long action, using short action"
                );
                short
            }))
        }
        _ => Ok(short),
    }
}
