//! Static action tables for remote-control key codes.
//!
//! This module maps host key codes to the semantic action names carried in
//! outbound events. Two tables exist: the short-press table, covering every key
//! the crate reacts to, and the long-press table, a subset restricted to the
//! directional pad and the select buttons.
//!
//! # Modules
//!
//! - `codes`: Android `KeyEvent` key code constants
//! - `table`: The tables themselves plus lookup and classification helpers
//!
//! # Example
//!
//! ```
//! use remote_input::keymap::{self, codes};
//!
//! assert_eq!(keymap::short_action(codes::DPAD_UP), Some("up"));
//! assert_eq!(keymap::long_action(codes::DPAD_UP), Some("longUp"));
//! assert_eq!(keymap::long_action(codes::MEDIA_PLAY), None);
//! ```

pub mod codes;
mod table;

pub use table::{
    is_dpad, is_select, is_trackable, long_action, long_entries, short_action, short_entries,
    ActionName,
};
