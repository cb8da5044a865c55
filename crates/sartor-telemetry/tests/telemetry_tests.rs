//! Integration tests for sartor-telemetry.

use std::sync::{Arc, Mutex};

use sartor_telemetry::bus::TelemetryBus;
use sartor_telemetry::events::{DrapeEvent, EventKind};
use sartor_telemetry::sinks::{EventSink, TracingSink, VecSink};

/// A sink that shares its captured events with the test body.
struct SharedSink {
    events: Arc<Mutex<Vec<DrapeEvent>>>,
}

impl EventSink for SharedSink {
    fn handle(&mut self, event: &DrapeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn name(&self) -> &str {
        "shared_sink"
    }
}

#[test]
fn emit_dispatches_to_sinks() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut bus = TelemetryBus::new();
    bus.add_sink(Box::new(SharedSink {
        events: Arc::clone(&captured),
    }));

    bus.emit(DrapeEvent::new(0, EventKind::StepBegin { sim_time: 0.0 }));
    bus.emit(DrapeEvent::new(
        0,
        EventKind::StepEnd {
            wall_time: 0.001,
            constraints_applied: 26,
        },
    ));

    let events = captured.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::StepBegin { .. }));
    assert!(matches!(
        events[1].kind,
        EventKind::StepEnd {
            constraints_applied: 26,
            ..
        }
    ));
}

#[test]
fn disabled_bus_drops_events() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut bus = TelemetryBus::new();
    bus.add_sink(Box::new(SharedSink {
        events: Arc::clone(&captured),
    }));
    bus.set_enabled(false);

    bus.emit(DrapeEvent::new(0, EventKind::StepBegin { sim_time: 0.0 }));

    assert!(captured.lock().unwrap().is_empty());
    assert!(!bus.is_enabled());
}

#[test]
fn multiple_sinks() {
    let mut bus = TelemetryBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 2);
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::new().name(), "tracing_sink");
}

#[test]
fn event_serialization() {
    let event = DrapeEvent::new(
        5,
        EventKind::Energy {
            kinetic: 1.0,
            max_acceleration_trend: 0.25,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: DrapeEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.step, 5);
}

#[test]
fn wrinkle_event_round_trip() {
    let event = DrapeEvent::new(10, EventKind::Wrinkle { activations: 17 });
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("activations"));
    let recovered: DrapeEvent = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        recovered.kind,
        EventKind::Wrinkle { activations: 17 }
    ));
}
