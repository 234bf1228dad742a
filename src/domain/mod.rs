//! Domain layer for remote-input.
//!
//! This module contains the value types shared by every other layer, and the
//! crate error type. None of it depends on the host surface, the event bus, or
//! the tracing pipeline.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`input`]: Key codes, key actions, view identifiers and timestamps
//!
//! # Examples
//!
//! ```
//! use remote_input::domain::{KeyAction, KeyCode, ViewId};
//!
//! let code = KeyCode(19);
//! assert_eq!(KeyAction::from_raw(1), Some(KeyAction::Up));
//! assert!(!ViewId::NO_FOCUS.is_focused());
//! # let _ = code;
//! ```

pub mod error;
pub mod input;

pub use error::{InputError, Result};
pub use input::{KeyAction, KeyCode, Millis, ViewId};
