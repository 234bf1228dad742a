//! Error types for remote-input.
//!
//! This module defines the centralized error type [`InputError`] and a type alias
//! [`Result`] used throughout the crate. Filtered inputs (unknown key codes, a
//! missing event bus, repeated focus notifications) are not errors; only contract
//! violations and configuration or I/O failures end up here.

use thiserror::Error;

use super::input::KeyCode;

/// The main error type for remote-input operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use remote_input::domain::{InputError, KeyCode};
///
/// let err = InputError::UnmappedAction { key_code: KeyCode(999) };
/// assert_eq!(err.to_string(), "no action name mapped for key code 999");
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// A dispatch was attempted for a key code with no short action.
    ///
    /// The dispatch gate only lets mapped key codes through, so this signals a
    /// broken invariant in the caller rather than bad host input.
    #[error("no action name mapped for key code {key_code}")]
    UnmappedAction {
        /// The key code that passed the gate without a mapping.
        key_code: KeyCode,
    },

    /// A configuration value is out of range or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML configuration document could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Filesystem or stream I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An outbound payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized `Result` type for remote-input operations.
pub type Result<T> = std::result::Result<T, InputError>;
