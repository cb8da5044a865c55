//! Simulation configuration.
//!
//! Parameters that control one drape run: timestep, step count, force
//! blend weights, wind, and body collision. The blend weights and the
//! wrinkle threshold reproduce the source system's fixed-weight
//! heuristic but are ordinary tunables here, not protocol contracts.

use serde::{Deserialize, Serialize};
use sartor_types::constants;
use sartor_types::{SartorError, SartorResult};

/// Configuration for a drape run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed integration timestep (seconds).
    pub dt: f32,

    /// Number of integration steps per request.
    pub steps: u32,

    /// Performance ceiling on simulated vertices. Denser patterns are
    /// downsampled (adaptive LOD), never rejected.
    pub max_vertices: usize,

    /// Past frames retained for the temporal force branch.
    pub temporal_memory: usize,

    /// Gravitational acceleration (m/s²), applied along −Y.
    pub gravity: f32,

    /// Global velocity damping coefficient (N·s/m).
    pub global_damping: f32,

    /// Scale on the linear spring force.
    pub spring_scale: f32,

    /// Scale on the curvature (bending) force.
    pub bending_scale: f32,

    /// Scale on the stretch-resistance force.
    pub stretch_scale: f32,

    /// Scale on the wrinkle perturbation force.
    pub wrinkle_scale: f32,

    /// Blend weight for the linear branch (spring + damping).
    pub blend_linear: f32,

    /// Blend weight for the nonlinear branch (bending + stretch +
    /// wrinkle).
    pub blend_nonlinear: f32,

    /// Blend weight for the temporal branch (velocity change).
    pub blend_temporal: f32,

    /// Curvature threshold (radians) that activates the wrinkle term.
    pub wrinkle_threshold: f32,

    /// Master switch for the wrinkle perturbation. Disabling it makes
    /// the run independent of the RNG entirely.
    pub wrinkle_enabled: bool,

    /// Peak wind force magnitude (N). Zero disables wind.
    pub wind_strength: f32,

    /// Wind oscillation frequency (rad/s).
    pub wind_frequency: f32,

    /// Body collision sphere radius at body scale 1.0 (meters).
    pub collision_radius: f32,

    /// Height of the body sphere center at body scale 1.0 (meters).
    pub collision_center_height: f32,

    /// Outward push force per meter of penetration (N/m).
    pub collision_stiffness: f32,

    /// Seed for the injectable RNG (wrinkle direction, multi-candidate
    /// style resolution). Identical seeds give bit-identical runs.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: constants::DEFAULT_DT,
            steps: constants::DEFAULT_STEPS,
            max_vertices: constants::DEFAULT_MAX_VERTICES,
            temporal_memory: constants::DEFAULT_TEMPORAL_MEMORY,
            gravity: constants::GRAVITY,
            global_damping: 0.6,
            spring_scale: 12.0,
            bending_scale: 2.0,
            stretch_scale: 4.0,
            wrinkle_scale: 0.02,
            blend_linear: constants::DEFAULT_BLEND_LINEAR,
            blend_nonlinear: constants::DEFAULT_BLEND_NONLINEAR,
            blend_temporal: constants::DEFAULT_BLEND_TEMPORAL,
            wrinkle_threshold: constants::DEFAULT_WRINKLE_THRESHOLD,
            wrinkle_enabled: true,
            wind_strength: 0.05,
            wind_frequency: 1.3,
            collision_radius: 0.32,
            collision_center_height: 0.95,
            collision_stiffness: 25.0,
            seed: 0x5EED,
        }
    }
}

impl SimConfig {
    /// A short preview run (half a second of simulation).
    pub fn preview() -> Self {
        Self {
            steps: 30,
            ..Default::default()
        }
    }

    /// A longer settling run (two simulated seconds).
    pub fn quality() -> Self {
        Self {
            steps: 120,
            ..Default::default()
        }
    }

    /// A fully deterministic configuration: wind and wrinkles off.
    ///
    /// With the stochastic and time-varying terms disabled, the run is
    /// a pure function of the descriptors.
    pub fn deterministic(seed: u64) -> Self {
        Self {
            wrinkle_enabled: false,
            wind_strength: 0.0,
            seed,
            ..Default::default()
        }
    }

    /// Validates the configuration before a run is initialized.
    pub fn validate(&self) -> SartorResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SartorError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if self.max_vertices < 4 {
            return Err(SartorError::InvalidConfig(format!(
                "max_vertices must be at least 4, got {}",
                self.max_vertices
            )));
        }
        if self.temporal_memory < 2 {
            return Err(SartorError::InvalidConfig(format!(
                "temporal_memory must be at least 2, got {}",
                self.temporal_memory
            )));
        }
        for (name, w) in [
            ("blend_linear", self.blend_linear),
            ("blend_nonlinear", self.blend_nonlinear),
            ("blend_temporal", self.blend_temporal),
        ] {
            if !(w.is_finite() && w >= 0.0) {
                return Err(SartorError::InvalidConfig(format!(
                    "{name} must be non-negative and finite, got {w}"
                )));
            }
        }
        Ok(())
    }
}
