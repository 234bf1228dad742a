//! remote-input: hardware key and focus events for TV-style UI surfaces.
//!
//! remote-input sits between a host UI surface and an application event bus:
//! - Maps remote-control key codes (d-pad, select, media, digits, channel) to
//!   named actions
//! - Tells short presses from long presses on the d-pad and select keys
//! - Forwards key-downs only when the key-down toggle is on
//! - Emits focus/blur transitions exactly once per focus change

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs) or embedding UI surface        │  ← Raw input
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - InputHandler orchestration                       │
//! │  - Press classification                             │
//! │  - Focus tracking                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Keymap        │   │ Dispatch      │   │ Infrastructure│
//! │ (keymap/)     │   │ (dispatch/)   │   │ (infra…/)     │
//! │ - Key codes   │   │ - Payloads    │   │ - Clock       │
//! │ - Action maps │   │ - Event bus   │   │ - Toggle      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Input state machine and the [`InputHandler`]
//! - [`dispatch`]: Outbound events and the event bus seam
//! - [`domain`]: Value types and errors
//! - [`infrastructure`]: Clock, feature toggle, data paths
//! - [`keymap`]: Key code constants and action tables
//! - `observability`: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```toml
//! enable_key_down_events = false
//! long_press_threshold_ms = 1000
//! trace_level = "debug"
//! trace_file = "~/.local/share/remote-input/remote-input-otlp.json"
//! trace_max_bytes = 10485760
//! trace_max_backups = 3
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use remote_input::{initialize, Config};
//! use remote_input::dispatch::RecordingBus;
//! use remote_input::domain::KeyAction;
//! use remote_input::keymap::codes;
//!
//! let config = Config { enable_key_down_events: true, ..Default::default() };
//! let bus = Arc::new(RecordingBus::default());
//! let mut handler = initialize(&config);
//! handler.attach_bus(&bus);
//!
//! handler.handle_raw_key_event(codes::MEDIA_PLAY_PAUSE, KeyAction::Down, 0)?;
//! handler.handle_raw_key_event(codes::MEDIA_PLAY_PAUSE, KeyAction::Up, 80)?;
//! assert_eq!(bus.events().len(), 2);
//! # Ok::<(), remote_input::InputError>(())
//! ```

pub mod app;
pub mod dispatch;
pub mod domain;
pub mod infrastructure;
pub mod keymap;

pub mod observability;

pub use app::{handle_event, Event, InputHandler, InputState};
pub use dispatch::{EventBus, OutboundEvent};
pub use domain::{InputError, KeyAction, KeyCode, Result, ViewId};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::DEFAULT_LONG_PRESS_THRESHOLD_MS;
use crate::observability::RotationPolicy;

/// Handler and tracing configuration.
///
/// Hosts either pass a flat string map (their own config system) or a TOML
/// document. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Forward key-down events in addition to key-ups. Default: `false`
    pub enable_key_down_events: bool,

    /// Hold time a d-pad or select press must exceed to be reported as long.
    /// Default: `1000`
    pub long_press_threshold_ms: u64,

    /// Tracing filter (`trace`, `debug`, `info`, ... or an `EnvFilter`
    /// directive). Default: `"info"`
    pub trace_level: Option<String>,

    /// Trace output file. `~` is expanded. Default: see
    /// [`infrastructure::default_trace_file`].
    pub trace_file: Option<String>,

    /// Size at which the trace file is rotated. Default: 10 MiB
    pub trace_max_bytes: u64,

    /// Rotated trace files kept. Default: `3`
    pub trace_max_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        let rotation = RotationPolicy::default();
        Self {
            enable_key_down_events: false,
            long_press_threshold_ms: DEFAULT_LONG_PRESS_THRESHOLD_MS,
            trace_level: None,
            trace_file: None,
            trace_max_bytes: rotation.max_bytes,
            trace_max_backups: rotation.max_backups,
        }
    }
}

impl Config {
    /// Parses configuration from a host key/value map.
    ///
    /// Values that fail to parse, and a zero threshold or rotation size, fall
    /// back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use remote_input::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("enable_key_down_events".to_string(), "true".to_string());
    /// map.insert("long_press_threshold_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(config.enable_key_down_events);
    /// assert_eq!(config.long_press_threshold_ms, 1000);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let enable_key_down_events = map
            .get("enable_key_down_events")
            .and_then(|s| parse_flag(s))
            .unwrap_or(defaults.enable_key_down_events);

        let long_press_threshold_ms = map
            .get("long_press_threshold_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.long_press_threshold_ms);

        let trace_max_bytes = map
            .get("trace_max_bytes")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|bytes| *bytes > 0)
            .unwrap_or(defaults.trace_max_bytes);

        let trace_max_backups = map
            .get("trace_max_backups")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.trace_max_backups);

        Self {
            enable_key_down_events,
            long_press_threshold_ms,
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").cloned(),
            trace_max_bytes,
            trace_max_backups,
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ConfigParse`] for malformed TOML and
    /// [`InputError::Config`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.long_press_threshold_ms == 0 {
            return Err(InputError::Config(
                "long_press_threshold_ms must be greater than zero".to_string(),
            ));
        }
        if self.trace_max_bytes == 0 {
            return Err(InputError::Config(
                "trace_max_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Rotation policy for the trace file.
    #[must_use]
    pub const fn rotation_policy(&self) -> RotationPolicy {
        RotationPolicy {
            max_bytes: self.trace_max_bytes,
            max_backups: self.trace_max_backups,
        }
    }

    /// Resolved trace file location.
    #[must_use]
    pub fn trace_file_path(&self) -> PathBuf {
        self.trace_file.as_deref().map_or_else(
            infrastructure::default_trace_file,
            infrastructure::expand_tilde,
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Creates the input handler for one UI surface.
///
/// Does not install tracing; call [`observability::init_tracing`] first if
/// trace output is wanted.
#[must_use]
pub fn initialize(config: &Config) -> InputHandler {
    tracing::debug!(
        enable_key_down_events = config.enable_key_down_events,
        long_press_threshold_ms = config.long_press_threshold_ms,
        "initializing input handler"
    );
    InputHandler::new(config)
}
