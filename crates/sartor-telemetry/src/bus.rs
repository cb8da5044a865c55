//! Telemetry bus — synchronous event dispatch to registered sinks.
//!
//! Each drape run owns its bus (like everything else in a run), so
//! dispatch is a plain method call: no channels, no locks. Sinks are
//! registered once at setup and receive every event in emission order.

use crate::events::DrapeEvent;
use crate::sinks::EventSink;

/// Dispatches drape events to registered sinks.
///
/// A disabled bus drops events silently, which keeps the emit call
/// sites in the integrator unconditional.
pub struct TelemetryBus {
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
}

impl TelemetryBus {
    /// Creates a new bus with no sinks.
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event to every sink. No-op when disabled.
    pub fn emit(&mut self, event: DrapeEvent) {
        if !self.enabled {
            return;
        }
        for sink in &mut self.sinks {
            sink.handle(&event);
        }
    }

    /// Notifies sinks that the run has ended (flush files, etc.).
    pub fn finalize(&mut self) {
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for TelemetryBus {
    fn default() -> Self {
        Self::new()
    }
}
