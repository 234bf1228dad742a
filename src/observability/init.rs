//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "remote-input";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level`, feeding an OpenTelemetry layer that exports to the
/// configured trace file.
///
/// Returns `false` when nothing was installed, either because the trace
/// directory could not be created or because a global subscriber already
/// exists. Tracing is optional, so neither case is an error.
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let trace_file = config.trace_file_path();

    if let Some(parent) = trace_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let writer = FileWriter::new(trace_file, config.rotation_policy());
    let provider = tracer::create_tracer_provider(writer, resource, SERVICE_NAME);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "tracing initialized");
    }
    installed
}
