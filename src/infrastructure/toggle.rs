//! Runtime feature toggle for key-down dispatch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared on/off switch controlling whether key-down events are forwarded.
///
/// Clones share the same flag, so the host can keep one and flip it while the
/// handler reads the other at dispatch time.
///
/// # Example
///
/// ```
/// use remote_input::infrastructure::FeatureToggle;
///
/// let toggle = FeatureToggle::new(false);
/// let host_side = toggle.clone();
/// host_side.set(true);
/// assert!(toggle.is_enabled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureToggle {
    enabled: Arc<AtomicBool>,
}

impl FeatureToggle {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}
