//! Outbound event type and its serialized form.

use serde::Serialize;

use crate::domain::{KeyAction, ViewId};
use crate::keymap::ActionName;

/// Name under which every event is emitted on the bus.
pub const EVENT_NAME: &str = "onHWKeyEvent";

/// `eventType` of a focus gain.
pub const FOCUS: ActionName = "focus";

/// `eventType` of a focus loss.
pub const BLUR: ActionName = "blur";

/// `eventKeyAction` carried by events not caused by a key.
pub const NOT_KEYED: i32 = -1;

/// A semantic event produced by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundEvent {
    /// Action name, or [`FOCUS`] / [`BLUR`].
    pub event_type: ActionName,
    /// Raw action code of the triggering key event, or [`NOT_KEYED`].
    pub event_key_action: i32,
    /// View the event is aimed at; omitted from the payload when unfocused.
    pub target: ViewId,
}

impl OutboundEvent {
    #[must_use]
    pub const fn key(event_type: ActionName, action: KeyAction, target: ViewId) -> Self {
        Self {
            event_type,
            event_key_action: action.raw(),
            target,
        }
    }

    #[must_use]
    pub const fn focus(target: ViewId) -> Self {
        Self {
            event_type: FOCUS,
            event_key_action: NOT_KEYED,
            target,
        }
    }

    #[must_use]
    pub const fn blur(target: ViewId) -> Self {
        Self {
            event_type: BLUR,
            event_key_action: NOT_KEYED,
            target,
        }
    }

    /// Wire representation. `tag` and `target` both carry the view id and are
    /// present only when a view is focused.
    #[must_use]
    pub fn payload(&self) -> Payload {
        let target = self.target.is_focused().then_some(self.target.0);
        Payload {
            event_type: self.event_type,
            event_key_action: self.event_key_action,
            tag: target,
            target,
        }
    }
}

/// Serialized body of an outbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub event_type: ActionName,
    pub event_key_action: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i32>,
}
