//! Infrastructure layer for host-provided services.
//!
//! The host surface owns the clock, the feature-flag store and the filesystem
//! layout. This module provides the small adapters the handler consumes from
//! them.

pub mod clock;
pub mod paths;
pub mod toggle;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use paths::{default_trace_file, expand_tilde, get_data_dir};
pub use toggle::FeatureToggle;
