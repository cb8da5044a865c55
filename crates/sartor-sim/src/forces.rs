//! The three-branch force model.
//!
//! Per vertex and per step, three spatial features are computed from
//! the neighborhood — local strain, curvature, and density — and fed
//! into three force branches:
//!
//! - **Linear**: spring restoring force from strain + global velocity
//!   damping.
//! - **Nonlinear**: curvature-driven bending, stretch resistance, and
//!   a randomized wrinkle perturbation gated on a curvature threshold.
//! - **Temporal**: velocity change derived from the last two history
//!   frames (zero until two frames exist).
//!
//! The branches blend per axis with fixed weights (0.5/0.3/0.2 by
//! default), then gravity, wind, and the body collision push are added
//! on top. Strain is measured against the spring network, so all three
//! spring tiers contribute through their own rest lengths; curvature
//! and density use the ordered ring of up-to-8 grid neighbors.
//!
//! Numerical guard (a hard requirement, not an optimization): any
//! neighbor at near-zero distance is skipped entirely rather than
//! divided by.

use glam::Vec3;
use rand::Rng;
use sartor_garment::FabricMaterial;
use sartor_mesh::GridTopology;
use sartor_types::constants::EPSILON;
use sartor_types::VertexId;

use crate::collision::BodySphere;
use crate::config::SimConfig;
use crate::state::{SimState, Spring};

/// Ring-neighbor offsets in consecutive angular order, starting
/// top-left and walking clockwise. Consecutiveness matters: curvature
/// averages the angle between each adjacent pair of directions.
const RING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// One ring neighbor: target vertex plus its rest-pose distance.
#[derive(Debug, Clone, Copy)]
struct RingNeighbor {
    index: u32,
    rest_dist: f32,
}

/// One incident spring, from the vertex's point of view.
#[derive(Debug, Clone, Copy)]
struct IncidentSpring {
    other: VertexId,
    rest: f32,
}

/// Spatial features of a vertex neighborhood.
#[derive(Debug, Clone, Copy)]
pub struct SpatialFeatures {
    /// Estimated displacement from the rest configuration, averaged
    /// over incident springs. Zero when every neighbor sits at rest
    /// distance.
    pub strain_vec: Vec3,
    /// Magnitude of `strain_vec`.
    pub strain: f32,
    /// Mean deviation (radians) of consecutive ring-direction angles
    /// from their rest-pose values. Zero for an undeformed grid.
    pub curvature: f32,
    /// Mean rest distance / mean actual distance over ring neighbors.
    /// Above 1.0 where the cloth is locally compressed.
    pub density: f32,
    /// Mean neighbor position minus vertex position. Gives the
    /// bending force its direction.
    pub laplacian: Vec3,
}

/// Per-step aggregate statistics from force accumulation, consumed by
/// telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceStats {
    /// Vertices whose curvature crossed the wrinkle threshold.
    pub wrinkle_activations: u32,
    /// Vertices pushed by the body sphere.
    pub collision_pushes: u32,
    /// Largest per-vertex acceleration-trend magnitude (m/s²) from the
    /// temporal branch.
    pub max_acceleration_trend: f32,
}

/// Precomputed neighborhood tables + the per-vertex force evaluation.
///
/// Built once per run from the grid and the spring network; read-only
/// during stepping.
pub struct ForceModel {
    /// Ordered ring-1 neighbors per vertex.
    ring: Vec<Vec<RingNeighbor>>,
    /// Rest-pose angle between each consecutive ring-direction pair.
    rest_angles: Vec<Vec<f32>>,
    /// Incident springs per vertex (every spring appears twice).
    incident: Vec<Vec<IncidentSpring>>,
}

impl ForceModel {
    /// Builds the adjacency tables for a grid + spring network.
    pub fn new(grid: &GridTopology, springs: &[Spring]) -> Self {
        let n = grid.vertex_count();
        let (res_x, res_y) = (grid.res_x as i32, grid.res_y as i32);

        let mut ring: Vec<Vec<RingNeighbor>> = Vec::with_capacity(n);
        let mut rest_angles: Vec<Vec<f32>> = Vec::with_capacity(n);

        for y in 0..res_y {
            for x in 0..res_x {
                let mut neighbors = Vec::with_capacity(8);
                let mut rest_dirs: Vec<Vec3> = Vec::with_capacity(8);

                for &(dx, dy) in &RING_OFFSETS {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= res_x || ny >= res_y {
                        continue;
                    }
                    // Rest offset in world space. The grid's y axis
                    // decreases with increasing row index.
                    let rest_offset = Vec3::new(
                        dx as f32 * grid.cell_x,
                        -(dy as f32) * grid.cell_y,
                        0.0,
                    );
                    neighbors.push(RingNeighbor {
                        index: (ny * res_x + nx) as u32,
                        rest_dist: rest_offset.length(),
                    });
                    rest_dirs.push(rest_offset.normalize());
                }

                let mut angles = Vec::with_capacity(rest_dirs.len().saturating_sub(1));
                for pair in rest_dirs.windows(2) {
                    angles.push(angle_between(pair[0], pair[1]));
                }

                ring.push(neighbors);
                rest_angles.push(angles);
            }
        }

        let mut incident: Vec<Vec<IncidentSpring>> = vec![Vec::new(); n];
        for s in springs {
            incident[s.a.index()].push(IncidentSpring {
                other: s.b,
                rest: s.rest,
            });
            incident[s.b.index()].push(IncidentSpring {
                other: s.a,
                rest: s.rest,
            });
        }

        Self {
            ring,
            rest_angles,
            incident,
        }
    }

    /// Computes the spatial features of vertex `i` against the current
    /// state. Neighbors at near-zero distance are skipped.
    pub fn features(&self, state: &SimState, i: usize) -> SpatialFeatures {
        let p = vertex_pos(state, i);

        // ─── Strain from incident springs ───
        let mut strain_sum = Vec3::ZERO;
        let mut strain_count = 0u32;
        for inc in &self.incident[i] {
            let q = vertex_pos(state, inc.other.index());
            let delta = q - p;
            let dist = delta.length();
            if dist < EPSILON {
                continue;
            }
            let e = (dist - inc.rest) / inc.rest;
            strain_sum += (delta / dist) * e;
            strain_count += 1;
        }
        // The vertex's displacement from rest opposes the neighbor
        // deviation average.
        let strain_vec = if strain_count > 0 {
            -strain_sum / strain_count as f32
        } else {
            Vec3::ZERO
        };

        // ─── Curvature, density, Laplacian from the ring ───
        // The ring never exceeds 8 neighbors; a fixed buffer keeps the
        // per-vertex evaluation allocation-free.
        let neighbors = &self.ring[i];
        let mut dirs = [None::<Vec3>; 8];
        let mut actual_sum = 0.0f32;
        let mut rest_sum = 0.0f32;
        let mut pos_sum = Vec3::ZERO;
        let mut ring_count = 0u32;

        for (k, nb) in neighbors.iter().enumerate() {
            let q = vertex_pos(state, nb.index as usize);
            let delta = q - p;
            let dist = delta.length();
            if dist < EPSILON {
                continue;
            }
            dirs[k] = Some(delta / dist);
            actual_sum += dist;
            rest_sum += nb.rest_dist;
            pos_sum += q;
            ring_count += 1;
        }

        let (density, laplacian) = if ring_count > 0 && actual_sum > EPSILON {
            // Mean rest over mean actual — the 1/count factors cancel.
            // Capped so a near-collapsed neighborhood cannot blow up
            // the wrinkle magnitude.
            (
                (rest_sum / actual_sum).min(8.0),
                pos_sum / ring_count as f32 - p,
            )
        } else {
            (1.0, Vec3::ZERO)
        };

        let mut angle_dev_sum = 0.0f32;
        let mut angle_count = 0u32;
        for (k, rest_angle) in self.rest_angles[i].iter().enumerate() {
            if let (Some(a), Some(b)) = (dirs[k], dirs[k + 1]) {
                angle_dev_sum += (angle_between(a, b) - rest_angle).abs();
                angle_count += 1;
            }
        }
        let curvature = if angle_count > 0 {
            angle_dev_sum / angle_count as f32
        } else {
            0.0
        };

        SpatialFeatures {
            strain_vec,
            strain: strain_vec.length(),
            curvature,
            density,
            laplacian,
        }
    }

    /// Accumulates the blended net force for every free vertex into
    /// the state's acceleration buffers (as force — the integrator
    /// divides by mass).
    ///
    /// `sim_time` drives the wind term; `rng` supplies wrinkle
    /// directions and is only consulted for vertices that cross the
    /// curvature threshold, keeping runs with identical seeds
    /// bit-identical.
    #[allow(clippy::too_many_arguments)]
    pub fn accumulate<R: Rng>(
        &self,
        state: &mut SimState,
        fabric: &FabricMaterial,
        config: &SimConfig,
        sphere: &BodySphere,
        sim_time: f32,
        rng: &mut R,
    ) -> ForceStats {
        let mut stats = ForceStats::default();
        let wind = wind_force(config, sim_time);
        let inv_dt = 1.0 / config.dt;

        for i in 0..state.vertex_count {
            if state.pinned[i] {
                state.acc_x[i] = 0.0;
                state.acc_y[i] = 0.0;
                state.acc_z[i] = 0.0;
                continue;
            }

            let feats = self.features(state, i);
            let p = vertex_pos(state, i);
            let vel = Vec3::new(state.vel_x[i], state.vel_y[i], state.vel_z[i]);

            // ─── Linear branch ───
            let spring = -feats.strain_vec * (fabric.stiffness * config.spring_scale);
            let damping = -vel * config.global_damping;

            // ─── Nonlinear branch ───
            let bending = feats.laplacian.normalize_or_zero()
                * (feats.curvature * fabric.bending_resistance * config.bending_scale);
            let stretch = -feats.strain_vec * ((1.0 - fabric.stretch) * config.stretch_scale);
            let wrinkle = if config.wrinkle_enabled
                && feats.curvature.abs() > config.wrinkle_threshold
            {
                stats.wrinkle_activations += 1;
                let magnitude = (feats.curvature.abs() - config.wrinkle_threshold)
                    * (1.0 - fabric.wrinkle_resistance)
                    * feats.density
                    * config.wrinkle_scale;
                random_unit_vector(rng) * magnitude
            } else {
                Vec3::ZERO
            };

            // ─── Temporal branch ───
            // Derived from the frames captured at the end of the two
            // previous steps; zero until two frames exist.
            let velocity_change = match state.last_two_frames() {
                Some((prev, last)) => {
                    let vc = Vec3::new(
                        last.vel_x[i] - prev.vel_x[i],
                        last.vel_y[i] - prev.vel_y[i],
                        last.vel_z[i] - prev.vel_z[i],
                    );
                    let trend = (vc * inv_dt).length();
                    if trend > stats.max_acceleration_trend {
                        stats.max_acceleration_trend = trend;
                    }
                    vc
                }
                None => Vec3::ZERO,
            };

            // ─── Blend + external forces ───
            let mut net = (spring + damping) * config.blend_linear
                + (bending + stretch + wrinkle) * config.blend_nonlinear
                + velocity_change * config.blend_temporal;

            net.y -= config.gravity * state.mass[i];
            net += wind;

            if let Some(push) = sphere.push_force(p, config.collision_stiffness) {
                stats.collision_pushes += 1;
                net += push;
            }

            state.acc_x[i] = net.x;
            state.acc_y[i] = net.y;
            state.acc_z[i] = net.z;
        }

        stats
    }
}

/// The global time-varying wind force. Small by construction: it adds
/// life to the drape without dominating gravity.
pub fn wind_force(config: &SimConfig, sim_time: f32) -> Vec3 {
    if config.wind_strength == 0.0 {
        return Vec3::ZERO;
    }
    let phase = sim_time * config.wind_frequency;
    Vec3::new(phase.sin(), 0.0, (phase * 0.7).cos()) * config.wind_strength
}

#[inline]
fn vertex_pos(state: &SimState, i: usize) -> Vec3 {
    Vec3::new(state.pos_x[i], state.pos_y[i], state.pos_z[i])
}

/// Angle between two unit vectors, with the dot product clamped
/// against rounding drift.
#[inline]
fn angle_between(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Uniformly distributed unit vector drawn from the injected RNG.
fn random_unit_vector<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let z: f32 = rng.gen_range(-1.0f32..1.0f32);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}
