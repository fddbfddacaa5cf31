//! Observability for The Eight Space: tracing subscriber setup with an
//! optional OpenTelemetry bridge.

pub mod tracing_setup;
