//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans recorded with `tracing` are bridged into OpenTelemetry and written as
//! OTLP JSON, one export batch per line, to a size-rotated file.
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → JSON lines
//! ```
//!
//! # Configuration
//!
//! - `trace_level`: filter directive, default `"info"`
//! - `trace_file`: output path, default under the XDG data directory
//! - `trace_max_bytes` / `trace_max_backups`: rotation policy
//!
//! # Usage
//!
//! ```rust,no_run
//! use remote_input::observability::init_tracing;
//! use remote_input::Config;
//!
//! let config = Config { trace_level: Some("debug".to_string()), ..Default::default() };
//! init_tracing(&config);
//! tracing::debug!("tracing is now active");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Span exporter and tracer provider
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{FileWriter, RotationPolicy};
pub use init::init_tracing;
