//! Benchmark runner — executes scenarios through the pipeline and
//! collects metrics.

use std::time::Instant;

use sartor_sim::DrapeSimulation;
use sartor_types::SartorResult;

use crate::metrics::DrapeMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> SartorResult<DrapeMetrics> {
        let mut sim =
            DrapeSimulation::new(&scenario.body, &scenario.garment, scenario.config.clone())?;

        // Initial positions for displacement tracking.
        let initial_x = sim.state().pos_x.clone();
        let initial_y = sim.state().pos_y.clone();
        let initial_z = sim.state().pos_z.clone();

        let steps = scenario.config.steps;
        let mut step_times: Vec<f64> = Vec::with_capacity(steps as usize);
        let mut wrinkle_activations = 0u64;
        let mut collision_pushes = 0u64;

        let total_start = Instant::now();

        for _ in 0..steps {
            let report = sim.step();
            step_times.push(report.wall_time);
            wrinkle_activations += report.wrinkle_activations as u64;
            collision_pushes += report.collision_pushes as u64;
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        let final_ke = sim.state().kinetic_energy();

        let max_displacement = (0..sim.state().vertex_count)
            .map(|i| {
                let dx = sim.state().pos_x[i] - initial_x[i];
                let dy = sim.state().pos_y[i] - initial_y[i];
                let dz = sim.state().pos_z[i] - initial_z[i];
                (dx * dx + dy * dy + dz * dz).sqrt()
            })
            .fold(0.0f32, f32::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let mesh = sim.extract()?;

        Ok(DrapeMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            steps,
            avg_step_time: avg_step,
            max_step_time: max_step,
            final_kinetic_energy: final_ke,
            max_displacement,
            wrinkle_activations,
            collision_pushes,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> SartorResult<Vec<DrapeMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            let metrics = Self::run(&scenario)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
