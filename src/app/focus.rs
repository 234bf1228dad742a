//! Focus tracking.
//!
//! Holds the id of the focused view and turns focus notifications into the
//! minimal blur/focus event sequence. Repeated notifications for the same view
//! produce nothing.

use crate::dispatch::OutboundEvent;
use crate::domain::ViewId;

/// Tracks the currently focused view.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    current: ViewId,
}

impl FocusTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: ViewId::NO_FOCUS,
        }
    }

    /// Last focused view, or [`ViewId::NO_FOCUS`].
    #[must_use]
    pub const fn current(&self) -> ViewId {
        self.current
    }

    /// Moves focus to `view`, returning `blur(previous)` (if anything was
    /// focused) followed by `focus(view)`.
    pub fn on_focus_changed(&mut self, view: ViewId) -> Vec<OutboundEvent> {
        if view == self.current {
            tracing::trace!(view = %view, "focus unchanged");
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if self.current.is_focused() {
            events.push(OutboundEvent::blur(self.current));
        }
        tracing::debug!(from = %self.current, to = %view, "focus changed");
        self.current = view;
        events.push(OutboundEvent::focus(view));
        events
    }

    /// Drops focus, returning `blur(previous)` if anything was focused.
    pub fn on_focus_cleared(&mut self) -> Vec<OutboundEvent> {
        if !self.current.is_focused() {
            return Vec::new();
        }

        let previous = std::mem::replace(&mut self.current, ViewId::NO_FOCUS);
        tracing::debug!(from = %previous, "focus cleared");
        vec![OutboundEvent::blur(previous)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_focus_has_no_blur() {
        let mut focus = FocusTracker::new();
        assert_eq!(focus.on_focus_changed(ViewId(4)), vec![OutboundEvent::focus(ViewId(4))]);
        assert_eq!(focus.current(), ViewId(4));
    }

    #[test]
    fn test_focus_move_blurs_previous_first() {
        let mut focus = FocusTracker::new();
        focus.on_focus_changed(ViewId(1));
        assert_eq!(
            focus.on_focus_changed(ViewId(2)),
            vec![OutboundEvent::blur(ViewId(1)), OutboundEvent::focus(ViewId(2))]
        );
    }

    #[test]
    fn test_repeated_focus_is_a_no_op() {
        let mut focus = FocusTracker::new();
        focus.on_focus_changed(ViewId(1));
        assert!(focus.on_focus_changed(ViewId(1)).is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut focus = FocusTracker::new();
        focus.on_focus_changed(ViewId(8));
        assert_eq!(focus.on_focus_cleared(), vec![OutboundEvent::blur(ViewId(8))]);
        assert!(focus.on_focus_cleared().is_empty());
        assert_eq!(focus.current(), ViewId::NO_FOCUS);
    }

    #[test]
    fn test_focus_to_unidentified_view_never_blurs_it() {
        let mut focus = FocusTracker::new();
        focus.on_focus_changed(ViewId(2));
        let events = focus.on_focus_changed(ViewId::NO_FOCUS);
        assert_eq!(
            events,
            vec![OutboundEvent::blur(ViewId(2)), OutboundEvent::focus(ViewId::NO_FOCUS)]
        );
        assert!(focus.on_focus_cleared().is_empty());
    }
}
