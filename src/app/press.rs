//! Short/long press classification.
//!
//! The classifier tracks at most one pending key-down. It is a two-state
//! machine:
//!
//! ```text
//!                on_key_down(trackable)
//! NoKeyPending ─────────────────────────► KeyPending { since }
//!      ▲                                        │
//!      └────────── on_key_up(any key) ──────────┘
//! ```
//!
//! A key-down while already pending is ignored, so the first press wins. Any
//! key-up that reaches the classifier returns it to `NoKeyPending`, including a
//! key-up for a different key than the one that armed it.

use crate::domain::{KeyCode, Millis};
use crate::keymap;

/// Hold duration a press must exceed to count as long.
pub const DEFAULT_LONG_PRESS_THRESHOLD_MS: Millis = 1000;

/// Pending-press state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    /// No trackable key is currently down.
    #[default]
    NoKeyPending,
    /// A trackable key went down at `since` and has not been classified yet.
    KeyPending {
        /// Monotonic time of the key-down.
        since: Millis,
    },
}

/// Outcome of a completed press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Short,
    Long,
}

/// Single-slot press timer.
#[derive(Debug, Clone)]
pub struct PressClassifier {
    state: PressState,
    threshold: Millis,
}

impl PressClassifier {
    #[must_use]
    pub const fn new(threshold: Millis) -> Self {
        Self {
            state: PressState::NoKeyPending,
            threshold,
        }
    }

    /// Arms the timer if `key_code` is trackable and nothing is pending.
    /// Returns whether it armed.
    pub fn on_key_down(&mut self, key_code: KeyCode, time: Millis) -> bool {
        if !keymap::is_trackable(key_code) || self.is_pending() {
            return false;
        }
        tracing::trace!(key_code = key_code.0, since = time, "press armed");
        self.state = PressState::KeyPending { since: time };
        true
    }

    /// Classifies the press completed by this key-up and disarms.
    ///
    /// `Long` requires a trackable key, a pending press, and a hold strictly
    /// longer than the threshold.
    pub fn on_key_up(&mut self, key_code: KeyCode, time: Millis) -> Classification {
        let classification = match self.state {
            PressState::KeyPending { since }
                if keymap::is_trackable(key_code)
                    && time.saturating_sub(since) > self.threshold =>
            {
                Classification::Long
            }
            _ => Classification::Short,
        };

        tracing::trace!(
            key_code = key_code.0,
            state = ?self.state,
            classification = ?classification,
            "press classified"
        );
        self.state = PressState::NoKeyPending;
        classification
    }

    #[must_use]
    pub const fn state(&self) -> PressState {
        self.state
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, PressState::KeyPending { .. })
    }

    /// Key-down time of the armed press, if any.
    #[must_use]
    pub const fn pending_since(&self) -> Option<Millis> {
        match self.state {
            PressState::KeyPending { since } => Some(since),
            PressState::NoKeyPending => None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> Millis {
        self.threshold
    }
}

impl Default for PressClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS_THRESHOLD_MS)
    }
}
