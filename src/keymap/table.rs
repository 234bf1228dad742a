//! Short- and long-press action tables.
//!
//! Both tables are `const` slices. Lookup walks the slice and the first matching
//! row wins; repeated rows are tolerated as long as they agree, which the tests
//! below enforce.

use super::codes::*;
use crate::domain::KeyCode;

/// Semantic event name carried in the `eventType` field.
pub type ActionName = &'static str;

const SHORT_ACTIONS: &[(KeyCode, ActionName)] = &[
    (DPAD_CENTER, "select"),
    (ENTER, "select"),
    (NUMPAD_ENTER, "select"),
    (BUTTON_SELECT, "select"),
    (SPACE, "select"),
    (MEDIA_PLAY_PAUSE, "playPause"),
    (MEDIA_PLAY, "play"),
    (MEDIA_PAUSE, "pause"),
    (MEDIA_NEXT, "next"),
    (MEDIA_PREVIOUS, "previous"),
    (MEDIA_REWIND, "rewind"),
    (MEDIA_FAST_FORWARD, "fastForward"),
    (MEDIA_STOP, "stop"),
    (MEDIA_NEXT, "next"),
    (MEDIA_PREVIOUS, "previous"),
    (DPAD_UP, "up"),
    (DPAD_RIGHT, "right"),
    (DPAD_DOWN, "down"),
    (DPAD_LEFT, "left"),
    (INFO, "info"),
    (MENU, "menu"),
    (KEYCODE_0, "0"),
    (KEYCODE_1, "1"),
    (KEYCODE_2, "2"),
    (KEYCODE_3, "3"),
    (KEYCODE_4, "4"),
    (KEYCODE_5, "5"),
    (KEYCODE_6, "6"),
    (KEYCODE_7, "7"),
    (KEYCODE_8, "8"),
    (KEYCODE_9, "9"),
    (CHANNEL_DOWN, "channelDown"),
    (CHANNEL_UP, "channelUp"),
];

const LONG_ACTIONS: &[(KeyCode, ActionName)] = &[
    (DPAD_CENTER, "longSelect"),
    (ENTER, "longSelect"),
    (NUMPAD_ENTER, "longSelect"),
    (BUTTON_SELECT, "longSelect"),
    (DPAD_UP, "longUp"),
    (DPAD_RIGHT, "longRight"),
    (DPAD_DOWN, "longDown"),
    (DPAD_LEFT, "longLeft"),
];

fn lookup(table: &[(KeyCode, ActionName)], key_code: KeyCode) -> Option<ActionName> {
    table
        .iter()
        .find(|(code, _)| *code == key_code)
        .map(|(_, name)| *name)
}

/// Returns the short-press action for `key_code`, or `None` if the key is not
/// handled at all.
#[must_use]
pub fn short_action(key_code: KeyCode) -> Option<ActionName> {
    lookup(SHORT_ACTIONS, key_code)
}

/// Returns the long-press action for `key_code`, or `None` if the key has no
/// long-press variant.
#[must_use]
pub fn long_action(key_code: KeyCode) -> Option<ActionName> {
    lookup(LONG_ACTIONS, key_code)
}

/// All short-table rows in declaration order, repeats included.
#[must_use]
pub fn short_entries() -> &'static [(KeyCode, ActionName)] {
    SHORT_ACTIONS
}

/// All long-table rows in declaration order.
#[must_use]
pub fn long_entries() -> &'static [(KeyCode, ActionName)] {
    LONG_ACTIONS
}

/// Up, right, down and left. The centre button is a select key, not a
/// direction.
#[must_use]
pub fn is_dpad(key_code: KeyCode) -> bool {
    matches!(key_code, DPAD_UP | DPAD_RIGHT | DPAD_DOWN | DPAD_LEFT)
}

/// Centre pad, enter, numpad enter and the gamepad select button. Space maps to
/// "select" in the short table but is deliberately not one of these.
#[must_use]
pub fn is_select(key_code: KeyCode) -> bool {
    matches!(key_code, DPAD_CENTER | BUTTON_SELECT | NUMPAD_ENTER | ENTER)
}

/// Keys eligible for long-press timing.
#[must_use]
pub fn is_trackable(key_code: KeyCode) -> bool {
    is_dpad(key_code) || is_select(key_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_repeated_short_rows_agree() {
        let mut seen: HashMap<KeyCode, ActionName> = HashMap::new();
        for &(code, name) in short_entries() {
            if let Some(previous) = seen.insert(code, name) {
                assert_eq!(previous, name, "conflicting rows for key code {code}");
            }
        }
        assert_eq!(short_action(MEDIA_NEXT), Some("next"));
        assert_eq!(short_action(MEDIA_PREVIOUS), Some("previous"));
    }

    #[test]
    fn test_long_table_is_subset_of_short_table() {
        for (code, _) in long_entries() {
            assert!(short_action(*code).is_some(), "long-only key code {code}");
        }
    }

    #[test]
    fn test_long_table_covers_exactly_the_trackable_keys() {
        for (code, _) in short_entries() {
            assert_eq!(
                long_action(*code).is_some(),
                is_trackable(*code),
                "key code {code}"
            );
        }
    }

    #[test]
    fn test_space_selects_but_is_not_trackable() {
        assert_eq!(short_action(SPACE), Some("select"));
        assert!(!is_select(SPACE));
        assert!(!is_trackable(SPACE));
        assert_eq!(long_action(SPACE), None);
    }

    #[test]
    fn test_center_is_select_not_dpad() {
        assert!(is_select(DPAD_CENTER));
        assert!(!is_dpad(DPAD_CENTER));
        assert_eq!(long_action(DPAD_CENTER), Some("longSelect"));
    }

    #[test]
    fn test_digits_and_media_have_short_actions_only() {
        assert_eq!(short_action(KEYCODE_7), Some("7"));
        assert_eq!(long_action(KEYCODE_7), None);
        assert_eq!(short_action(MEDIA_FAST_FORWARD), Some("fastForward"));
        assert_eq!(long_action(CHANNEL_UP), None);
    }

    #[test]
    fn test_unhandled_keys_are_absent() {
        assert_eq!(short_action(VOLUME_UP), None);
        assert_eq!(short_action(KeyCode(-5)), None);
        assert_eq!(long_action(KeyCode(0)), None);
    }
}
