//! Drape run event types.
//!
//! Lightweight value types emitted by the integrator at various points
//! in each step. They carry just enough data to be useful for
//! monitoring and instability diagnosis.

use serde::{Deserialize, Serialize};

/// An event emitted during a drape run.
///
/// Events are tagged with a step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrapeEvent {
    /// Integration step (0-indexed).
    pub step: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// An integration step started.
    StepBegin {
        /// Simulated time at the start of this step (seconds).
        sim_time: f64,
    },

    /// An integration step completed.
    StepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
        /// Attachment constraints applied after the step.
        constraints_applied: u32,
    },

    /// Energy and derivative-trend snapshot after a step.
    ///
    /// `max_acceleration_trend` is the largest per-vertex acceleration
    /// trend from the temporal force branch; a rising trend across
    /// steps is an early instability signal.
    Energy {
        /// Kinetic energy (0.5 · Σ m · v²).
        kinetic: f64,
        /// Largest per-vertex acceleration-trend magnitude (m/s²).
        max_acceleration_trend: f32,
    },

    /// Body collision activity during a step.
    Collision {
        /// Vertices pushed out of the body sphere.
        pushes: u32,
    },

    /// Wrinkle perturbation activity during a step.
    Wrinkle {
        /// Vertices whose curvature exceeded the wrinkle threshold.
        activations: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl DrapeEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u32, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
