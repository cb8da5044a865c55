//! Semi-implicit (symplectic) Euler integration.
//!
//! One step: accumulate forces, then `a = F/m`, `v += a·dt`,
//! `p += v·dt` (velocity first, so the position update already uses
//! the new velocity). Constraints apply after integration, and the
//! resulting frame is pushed into the bounded temporal history.
//!
//! A step is atomic — callers that need deadlines or cancellation
//! check between steps and simply stop stepping; there are no side
//! effects to roll back.

use std::time::Instant;

use rand::Rng;
use sartor_garment::FabricMaterial;

use crate::collision::BodySphere;
use crate::config::SimConfig;
use crate::constraints::apply_constraints;
use crate::forces::ForceModel;
use crate::state::SimState;

/// Result of one integration step, consumed by telemetry and metrics.
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    /// Step index (0-based) of the completed step.
    pub step: u32,
    /// Wall-clock time for the step (seconds).
    pub wall_time: f64,
    /// Constraints applied after integration.
    pub constraints_applied: u32,
    /// Wrinkle perturbations triggered during force accumulation.
    pub wrinkle_activations: u32,
    /// Vertices pushed out of the body sphere.
    pub collision_pushes: u32,
    /// Largest acceleration-trend magnitude from the temporal branch.
    pub max_acceleration_trend: f32,
    /// Kinetic energy after the step.
    pub kinetic_energy: f64,
}

/// Advances the state by exactly one timestep.
///
/// `sim_time` is the simulated time at the start of the step (drives
/// the wind term).
pub fn step<R: Rng>(
    state: &mut SimState,
    model: &ForceModel,
    fabric: &FabricMaterial,
    config: &SimConfig,
    sphere: &BodySphere,
    rng: &mut R,
    sim_time: f32,
) -> StepReport {
    let start = Instant::now();
    let dt = config.dt;

    let stats = model.accumulate(state, fabric, config, sphere, sim_time, rng);

    for i in 0..state.vertex_count {
        let inv_m = state.inv_mass[i];
        if inv_m == 0.0 {
            continue;
        }

        // The accumulate pass stored net force; convert to acceleration
        // in place so the state's acceleration channel stays truthful.
        state.acc_x[i] *= inv_m;
        state.acc_y[i] *= inv_m;
        state.acc_z[i] *= inv_m;

        state.vel_x[i] += state.acc_x[i] * dt;
        state.vel_y[i] += state.acc_y[i] * dt;
        state.vel_z[i] += state.acc_z[i] * dt;

        state.pos_x[i] += state.vel_x[i] * dt;
        state.pos_y[i] += state.vel_y[i] * dt;
        state.pos_z[i] += state.vel_z[i] * dt;
    }

    let constraints_applied = apply_constraints(state, dt);
    state.push_history();

    let completed = state.steps_completed;
    state.steps_completed += 1;

    StepReport {
        step: completed,
        wall_time: start.elapsed().as_secs_f64(),
        constraints_applied,
        wrinkle_activations: stats.wrinkle_activations,
        collision_pushes: stats.collision_pushes,
        max_acceleration_trend: stats.max_acceleration_trend,
        kinetic_energy: state.kinetic_energy(),
    }
}
