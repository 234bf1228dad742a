//! Android `KeyEvent` key codes understood by the action tables.

use crate::domain::KeyCode;

pub const KEYCODE_0: KeyCode = KeyCode(7);
pub const KEYCODE_1: KeyCode = KeyCode(8);
pub const KEYCODE_2: KeyCode = KeyCode(9);
pub const KEYCODE_3: KeyCode = KeyCode(10);
pub const KEYCODE_4: KeyCode = KeyCode(11);
pub const KEYCODE_5: KeyCode = KeyCode(12);
pub const KEYCODE_6: KeyCode = KeyCode(13);
pub const KEYCODE_7: KeyCode = KeyCode(14);
pub const KEYCODE_8: KeyCode = KeyCode(15);
pub const KEYCODE_9: KeyCode = KeyCode(16);

pub const DPAD_UP: KeyCode = KeyCode(19);
pub const DPAD_DOWN: KeyCode = KeyCode(20);
pub const DPAD_LEFT: KeyCode = KeyCode(21);
pub const DPAD_RIGHT: KeyCode = KeyCode(22);
pub const DPAD_CENTER: KeyCode = KeyCode(23);

pub const SPACE: KeyCode = KeyCode(62);
pub const ENTER: KeyCode = KeyCode(66);
pub const MENU: KeyCode = KeyCode(82);

pub const MEDIA_PLAY_PAUSE: KeyCode = KeyCode(85);
pub const MEDIA_STOP: KeyCode = KeyCode(86);
pub const MEDIA_NEXT: KeyCode = KeyCode(87);
pub const MEDIA_PREVIOUS: KeyCode = KeyCode(88);
pub const MEDIA_REWIND: KeyCode = KeyCode(89);
pub const MEDIA_FAST_FORWARD: KeyCode = KeyCode(90);

pub const BUTTON_SELECT: KeyCode = KeyCode(109);
pub const MEDIA_PLAY: KeyCode = KeyCode(126);
pub const MEDIA_PAUSE: KeyCode = KeyCode(127);
pub const NUMPAD_ENTER: KeyCode = KeyCode(160);
pub const INFO: KeyCode = KeyCode(165);
pub const CHANNEL_UP: KeyCode = KeyCode(166);
pub const CHANNEL_DOWN: KeyCode = KeyCode(167);

/// Volume keys are handled by the platform and never reach the tables.
pub const VOLUME_UP: KeyCode = KeyCode(24);
