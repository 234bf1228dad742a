//! Raw input value types supplied by the host surface.
//!
//! Key codes and view identifiers are opaque integers owned by the host. They are
//! wrapped in newtypes so the two cannot be mixed up at call sites.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonic timestamp or duration in milliseconds.
pub type Millis = u64;

/// Host-supplied integer identifying a physical or virtual button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub i32);

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a raw key event.
///
/// Raw codes follow the Android convention: `0` for a press, `1` for a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// The key went down.
    Down,
    /// The key was released.
    Up,
}

impl KeyAction {
    /// Raw code for [`KeyAction::Down`].
    pub const RAW_DOWN: i32 = 0;
    /// Raw code for [`KeyAction::Up`].
    pub const RAW_UP: i32 = 1;

    /// Maps a raw host action code, returning `None` for anything that is not a
    /// plain press or release (repeat batches, cancellations).
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Self::RAW_DOWN => Some(Self::Down),
            Self::RAW_UP => Some(Self::Up),
            _ => None,
        }
    }

    /// The raw code carried in outbound `eventKeyAction` fields.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Down => Self::RAW_DOWN,
            Self::Up => Self::RAW_UP,
        }
    }
}

/// Identifier of a focus-capable UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub i32);

impl ViewId {
    /// Sentinel meaning "nothing focused".
    pub const NO_FOCUS: Self = Self(-1);

    /// Returns `true` unless this is [`ViewId::NO_FOCUS`].
    #[must_use]
    pub const fn is_focused(self) -> bool {
        self.0 != Self::NO_FOCUS.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::NO_FOCUS
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_focused() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("NO_FOCUS")
        }
    }
}
