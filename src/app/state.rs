//! Per-surface input state.

use super::focus::FocusTracker;
use super::press::PressClassifier;
use crate::domain::{Millis, ViewId};

/// All mutable state of one UI surface.
///
/// Each surface owns its own instance; nothing here is shared or global, so
/// independent surfaces never see each other's presses or focus.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Pending-press timer.
    pub press: PressClassifier,
    /// Focused view.
    pub focus: FocusTracker,
}

impl InputState {
    #[must_use]
    pub const fn new(long_press_threshold: Millis) -> Self {
        Self {
            press: PressClassifier::new(long_press_threshold),
            focus: FocusTracker::new(),
        }
    }

    /// Target for key events: hardware keys belong to whatever is focused.
    #[must_use]
    pub const fn focused_view(&self) -> ViewId {
        self.focus.current()
    }
}
