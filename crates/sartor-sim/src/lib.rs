//! # sartor-sim
//!
//! The simulation core: spring network construction, attachment
//! constraints, the three-branch force model, the fixed-step
//! semi-implicit Euler integrator, and the end-to-end drape pipeline.
//!
//! ## Key Types
//!
//! - [`SimState`] — per-run SoA buffers for vertices, springs,
//!   constraints, and the bounded temporal history
//! - [`SimConfig`] — timestep, step count, force weights, collision
//!   and wind parameters
//! - [`ForceModel`] — precomputed adjacency + the per-vertex force
//!   evaluation
//! - [`DrapeSimulation`] — one garment-generation request, from
//!   descriptors to an extracted [`sartor_mesh::ClothMesh`]
//!
//! Each run owns its state exclusively; concurrent drape requests are
//! safe by construction and the caller decides how to schedule them.

pub mod collision;
pub mod config;
pub mod constraints;
pub mod forces;
pub mod integrator;
pub mod pipeline;
pub mod springs;
pub mod state;

pub use config::SimConfig;
pub use forces::ForceModel;
pub use pipeline::{drape, DrapeSimulation};
pub use state::{Constraint, ConstraintKind, SimState, Spring, SpringKind};
