//! # sartor-mesh
//!
//! Grid topology construction and the renderable mesh output type.
//!
//! ## Key Types
//!
//! - [`GridTopology`] — rectangular vertex grid with positions and UVs,
//!   built from a body descriptor + garment pattern
//! - [`ClothMesh`] — flat-array mesh (positions/normals/UVs/indices)
//!   handed to the rendering layer
//! - [`extract::extract_mesh`] — packages final simulation positions
//!   into a `ClothMesh` with recomputed normals

pub mod extract;
pub mod grid;
pub mod mesh;
pub mod normals;

pub use grid::{build_grid, GridTopology};
pub use mesh::{ClothMesh, MeshMetadata};
