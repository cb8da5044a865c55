//! # sartor-telemetry
//!
//! Structured telemetry for drape runs. The integrator emits per-step
//! events (timing, energy, constraint and collision activity) that can
//! be consumed by pluggable sinks (tracing, in-memory capture).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::TelemetryBus;
pub use events::{DrapeEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
