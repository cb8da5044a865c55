//! # sartor-types
//!
//! Shared types, identifiers, error types, and simulation constants
//! for the Sartor garment draping core.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Sartor crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{SartorError, SartorResult};
pub use ids::{ConstraintId, SpringId, VertexId};
pub use scalar::Scalar;
