//! Simulation state — SoA buffers for all per-vertex data, plus the
//! spring network, attachment constraints, and the bounded temporal
//! history.
//!
//! One `SimState` exists per drape request and is owned exclusively by
//! it: there is no shared or global simulation instance, so concurrent
//! requests never contend.

use std::collections::VecDeque;

use sartor_garment::FabricMaterial;
use sartor_mesh::GridTopology;
use sartor_types::VertexId;

/// Spring categories, distinguished by the grid offset they connect
/// and the deformation mode they resist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Axis-aligned neighbor (resists stretch).
    Structural,
    /// Diagonal neighbor (resists shear).
    Shear,
    /// Two-step axis neighbor (resists folding).
    Bending,
}

/// A spring between two vertices, stored as typed index pairs into
/// the vertex arrays. Rest lengths are strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    /// First vertex.
    pub a: VertexId,
    /// Second vertex.
    pub b: VertexId,
    /// Unstretched target distance (meters).
    pub rest: f32,
    /// Spring category.
    pub kind: SpringKind,
}

/// Constraint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Position = target, velocity = 0, every step.
    Fixed,
    /// Position nudged toward target by `strength × dt` each step.
    Soft,
}

/// An attachment constraint on a single vertex.
#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    /// Constrained vertex.
    pub vertex: VertexId,
    /// Fixed or soft.
    pub kind: ConstraintKind,
    /// Target point in world space.
    pub target: [f32; 3],
    /// Pull strength in [0, 1]. Ignored for fixed constraints.
    pub strength: f32,
}

/// One retained frame of the temporal history: positions and
/// velocities only, captured after constraint application.
#[derive(Debug, Clone)]
pub struct HistoryFrame {
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,
}

/// SoA simulation state for one drape run.
///
/// All per-vertex arrays have length `vertex_count`. Pinned vertices
/// (those under a fixed constraint) carry `inv_mass = 0` and are
/// skipped by force accumulation and integration; they move only by
/// direct constraint assignment.
pub struct SimState {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Grid columns.
    pub res_x: usize,
    /// Grid rows.
    pub res_y: usize,

    // ─── Position ───
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,

    // ─── Acceleration (force / mass after the last step) ───
    pub acc_x: Vec<f32>,
    pub acc_y: Vec<f32>,
    pub acc_z: Vec<f32>,

    // ─── Per-vertex mass (inverse mass zero for pinned) ───
    pub mass: Vec<f32>,
    pub inv_mass: Vec<f32>,
    pub pinned: Vec<bool>,

    /// The spring network, as index pairs.
    pub springs: Vec<Spring>,

    /// Attachment constraints.
    pub constraints: Vec<Constraint>,

    /// Ring history of past frames, newest at the back. Never exceeds
    /// `temporal_memory`.
    pub history: VecDeque<HistoryFrame>,

    /// Capacity of the ring history.
    pub temporal_memory: usize,

    /// Integration steps completed so far.
    pub steps_completed: u32,
}

impl SimState {
    /// Initializes state from a built grid, spring network, and
    /// constraint set.
    ///
    /// Positions copy the grid; velocities and accelerations start at
    /// zero. Per-vertex mass comes from the fabric's density. Vertices
    /// under a fixed constraint are pinned (`inv_mass = 0`).
    pub fn new(
        grid: &GridTopology,
        springs: Vec<Spring>,
        constraints: Vec<Constraint>,
        fabric: &FabricMaterial,
        temporal_memory: usize,
    ) -> Self {
        let n = grid.vertex_count();
        let vertex_mass = fabric.vertex_mass();

        let mut mass = vec![vertex_mass; n];
        let mut inv_mass = vec![1.0 / vertex_mass; n];
        let mut pinned = vec![false; n];

        for c in &constraints {
            if c.kind == ConstraintKind::Fixed {
                let i = c.vertex.index();
                mass[i] = f32::MAX;
                inv_mass[i] = 0.0;
                pinned[i] = true;
            }
        }

        Self {
            vertex_count: n,
            res_x: grid.res_x,
            res_y: grid.res_y,
            pos_x: grid.pos_x.clone(),
            pos_y: grid.pos_y.clone(),
            pos_z: grid.pos_z.clone(),
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            acc_x: vec![0.0; n],
            acc_y: vec![0.0; n],
            acc_z: vec![0.0; n],
            mass,
            inv_mass,
            pinned,
            springs,
            constraints,
            history: VecDeque::new(),
            temporal_memory,
            steps_completed: 0,
        }
    }

    /// Captures the current positions and velocities into the ring
    /// history, evicting the oldest frame when over capacity.
    pub fn push_history(&mut self) {
        if self.temporal_memory == 0 {
            return;
        }
        while self.history.len() >= self.temporal_memory {
            self.history.pop_front();
        }
        self.history.push_back(HistoryFrame {
            pos_x: self.pos_x.clone(),
            pos_y: self.pos_y.clone(),
            pos_z: self.pos_z.clone(),
            vel_x: self.vel_x.clone(),
            vel_y: self.vel_y.clone(),
            vel_z: self.vel_z.clone(),
        });
    }

    /// The last two history frames, newest last, or `None` when fewer
    /// than two steps have run. The temporal force branch is zero in
    /// that case.
    pub fn last_two_frames(&self) -> Option<(&HistoryFrame, &HistoryFrame)> {
        let len = self.history.len();
        if len < 2 {
            return None;
        }
        Some((&self.history[len - 2], &self.history[len - 1]))
    }

    /// Compute total kinetic energy: 0.5 · Σ mᵢ · ‖vᵢ‖².
    /// Pinned vertices are excluded.
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.vertex_count {
            if self.pinned[i] {
                continue;
            }
            let vx = self.vel_x[i] as f64;
            let vy = self.vel_y[i] as f64;
            let vz = self.vel_z[i] as f64;
            let m = self.mass[i] as f64;
            energy += 0.5 * m * (vx * vx + vy * vy + vz * vz);
        }
        energy
    }

    /// Largest vertex speed (m/s). Useful for stability checks.
    pub fn max_speed(&self) -> f32 {
        let mut max2 = 0.0f32;
        for i in 0..self.vertex_count {
            let v2 = self.vel_x[i] * self.vel_x[i]
                + self.vel_y[i] * self.vel_y[i]
                + self.vel_z[i] * self.vel_z[i];
            max2 = max2.max(v2);
        }
        max2.sqrt()
    }

    /// Returns true if any position or velocity is non-finite.
    pub fn has_non_finite(&self) -> bool {
        let arrays = [
            &self.pos_x, &self.pos_y, &self.pos_z, &self.vel_x, &self.vel_y, &self.vel_z,
        ];
        arrays
            .iter()
            .any(|arr| arr.iter().any(|v| !v.is_finite()))
    }
}
