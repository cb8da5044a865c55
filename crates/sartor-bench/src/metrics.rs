//! Benchmark metrics — data collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from one benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrapeMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of integration steps executed.
    pub steps: u32,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Maximum step time (seconds).
    pub max_step_time: f64,
    /// Final kinetic energy (approaches zero for a settled drape).
    pub final_kinetic_energy: f64,
    /// Maximum vertex displacement from the initial grid (meters).
    pub max_displacement: f32,
    /// Total wrinkle activations across the run.
    pub wrinkle_activations: u64,
    /// Total body-collision pushes across the run.
    pub collision_pushes: u64,
    /// Vertex count.
    pub vertex_count: usize,
    /// Triangle count of the extracted mesh.
    pub triangle_count: usize,
}

impl DrapeMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,triangle_count,steps,total_wall_time_s,avg_step_ms,max_step_ms,\
         final_ke,max_displacement,wrinkle_activations,collision_pushes"
            .to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.6e},{:.6},{},{}",
            self.scenario,
            self.vertex_count,
            self.triangle_count,
            self.steps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.wrinkle_activations,
            self.collision_pushes,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[DrapeMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
