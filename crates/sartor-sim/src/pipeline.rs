//! The end-to-end drape pipeline: descriptors in, renderable mesh out.
//!
//! One [`DrapeSimulation`] is one garment-generation request. Its
//! lifecycle follows the run state machine structurally:
//!
//! - `new()` — Created → Initialized. Style resolution, topology,
//!   springs, constraints, state population. All validation happens
//!   here; a failed validation returns the error and nothing else
//!   ever runs.
//! - `step()` / `run()` — Stepping. Fixed-step integration; callers
//!   with deadlines check between steps and just stop.
//! - `extract(self)` — Extracted. Consumes the simulation, so a
//!   discarded run can never be stepped or extracted again.
//!
//! The whole pipeline is CPU-bound with no blocking I/O; callers
//! dispatch requests to their own worker pool, and because every run
//! owns its state, any number of requests may run in parallel.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sartor_garment::style::resolve_style;
use sartor_garment::{BodyDescriptor, FabricMaterial, GarmentDescriptor, GarmentPattern};
use sartor_mesh::extract::{extract_mesh, ExtractionInfo};
use sartor_mesh::{build_grid, ClothMesh, GridTopology};
use sartor_telemetry::{DrapeEvent, EventKind, TelemetryBus};
use sartor_types::SartorResult;

use crate::collision::BodySphere;
use crate::config::SimConfig;
use crate::constraints::generate_constraints;
use crate::forces::ForceModel;
use crate::integrator::{self, StepReport};
use crate::springs::build_springs;
use crate::state::SimState;

/// A single garment-generation request, from descriptors to mesh.
pub struct DrapeSimulation {
    state: SimState,
    grid: GridTopology,
    pattern: GarmentPattern,
    fabric: FabricMaterial,
    config: SimConfig,
    model: ForceModel,
    sphere: BodySphere,
    rng: StdRng,
    sim_time: f32,
}

impl DrapeSimulation {
    /// Initializes a run from the input descriptors.
    ///
    /// Resolves the style to a pattern + fabric (unknown styles fall
    /// back to shirt + cotton), builds the grid (adaptive LOD under
    /// `config.max_vertices`), the spring network, and the attachment
    /// constraints. The only fatal outcome is a degenerate topology.
    pub fn new(
        body: &BodyDescriptor,
        garment: &GarmentDescriptor,
        config: SimConfig,
    ) -> SartorResult<Self> {
        config.validate()?;
        let body = body.sanitized();

        let mut rng = StdRng::seed_from_u64(config.seed);
        let (pattern, fabric) = resolve_style(garment.style, &mut rng);

        let grid = build_grid(&body, &pattern, config.max_vertices)?;
        let springs = build_springs(grid.res_x, grid.res_y, grid.spacing());
        let constraints = generate_constraints(&grid, &body, &pattern);

        let model = ForceModel::new(&grid, &springs);
        let state = SimState::new(&grid, springs, constraints, &fabric, config.temporal_memory);
        let sphere = BodySphere::from_body(&body, &config);

        Ok(Self {
            state,
            grid,
            pattern,
            fabric,
            config,
            model,
            sphere,
            rng,
            sim_time: 0.0,
        })
    }

    /// Advances the simulation by one atomic step.
    pub fn step(&mut self) -> StepReport {
        let report = integrator::step(
            &mut self.state,
            &self.model,
            &self.fabric,
            &self.config,
            &self.sphere,
            &mut self.rng,
            self.sim_time,
        );
        self.sim_time += self.config.dt;
        report
    }

    /// Runs the configured number of steps (minus any already taken).
    pub fn run(&mut self) {
        while self.state.steps_completed < self.config.steps {
            self.step();
        }
    }

    /// Runs like [`run`](Self::run), emitting telemetry per step.
    pub fn run_with_bus(&mut self, bus: &mut TelemetryBus) {
        while self.state.steps_completed < self.config.steps {
            let step = self.state.steps_completed;
            bus.emit(DrapeEvent::new(
                step,
                EventKind::StepBegin {
                    sim_time: self.sim_time as f64,
                },
            ));

            let report = self.step();

            bus.emit(DrapeEvent::new(
                step,
                EventKind::StepEnd {
                    wall_time: report.wall_time,
                    constraints_applied: report.constraints_applied,
                },
            ));
            bus.emit(DrapeEvent::new(
                step,
                EventKind::Energy {
                    kinetic: report.kinetic_energy,
                    max_acceleration_trend: report.max_acceleration_trend,
                },
            ));
            if report.collision_pushes > 0 {
                bus.emit(DrapeEvent::new(
                    step,
                    EventKind::Collision {
                        pushes: report.collision_pushes,
                    },
                ));
            }
            if report.wrinkle_activations > 0 {
                bus.emit(DrapeEvent::new(
                    step,
                    EventKind::Wrinkle {
                        activations: report.wrinkle_activations,
                    },
                ));
            }
        }
        bus.finalize();
    }

    /// Extracts the final mesh, consuming the simulation.
    pub fn extract(self) -> SartorResult<ClothMesh> {
        extract_mesh(
            &self.grid,
            &self.state.pos_x,
            &self.state.pos_y,
            &self.state.pos_z,
            ExtractionInfo {
                spring_count: self.state.springs.len(),
                constraint_count: self.state.constraints.len(),
                steps_simulated: self.state.steps_completed,
            },
        )
    }

    /// Read access to the simulation state (for inspection and tests).
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The built grid topology.
    pub fn grid(&self) -> &GridTopology {
        &self.grid
    }

    /// The resolved pattern.
    pub fn pattern(&self) -> &GarmentPattern {
        &self.pattern
    }

    /// The resolved fabric.
    pub fn fabric(&self) -> &FabricMaterial {
        &self.fabric
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulated time elapsed so far (seconds).
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }
}

/// Convenience wrapper: initialize, run all configured steps, extract.
pub fn drape(
    body: &BodyDescriptor,
    garment: &GarmentDescriptor,
    config: SimConfig,
) -> SartorResult<ClothMesh> {
    let mut sim = DrapeSimulation::new(body, garment, config)?;
    sim.run();
    sim.extract()
}
