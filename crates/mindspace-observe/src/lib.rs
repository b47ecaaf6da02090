//! Observability setup for Mindspace: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
