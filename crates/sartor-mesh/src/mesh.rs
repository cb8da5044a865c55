//! Renderable cloth mesh output.
//!
//! The mesh uses flat interleaved arrays (`[x0, y0, z0, x1, y1, z1, …]`)
//! because its consumer is the rendering/visualization layer, which
//! uploads these buffers directly. Parallel arrays: `positions` and
//! `normals` hold 3 floats per vertex, `uvs` holds 2.

use serde::{Deserialize, Serialize};
use sartor_types::{SartorError, SartorResult};

/// Counts and provenance carried alongside the mesh buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshMetadata {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of springs in the network the mesh was simulated with.
    pub spring_count: usize,
    /// Number of attachment constraints.
    pub constraint_count: usize,
    /// Integration steps the simulation actually ran.
    pub steps_simulated: u32,
    /// Grid resolution as (columns, rows).
    pub resolution: (usize, usize),
}

/// The final draped garment mesh handed to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothMesh {
    /// Interleaved vertex positions: `[x0, y0, z0, x1, y1, z1, …]`.
    pub positions: Vec<f32>,
    /// Interleaved unit vertex normals, parallel to `positions`.
    pub normals: Vec<f32>,
    /// Interleaved texture coordinates: `[u0, v0, u1, v1, …]`.
    pub uvs: Vec<f32>,
    /// Triangle indices — each triangle is `[v0, v1, v2]`, stored flat.
    pub face_indices: Vec<u32>,
    /// Counts and step provenance.
    pub metadata: MeshMetadata,
}

impl ClothMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.face_indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        ]
    }

    /// Returns the normal of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn normal(&self, i: usize) -> [f32; 3] {
        [
            self.normals[i * 3],
            self.normals[i * 3 + 1],
            self.normals[i * 3 + 2],
        ]
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [
            self.face_indices[base],
            self.face_indices[base + 1],
            self.face_indices[base + 2],
        ]
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All parallel arrays agree on the vertex count
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    /// - Metadata counts match the buffers
    pub fn validate(&self) -> SartorResult<()> {
        if self.positions.len() % 3 != 0 {
            return Err(SartorError::InvalidMesh(
                "Position array length not divisible by 3".into(),
            ));
        }
        let n = self.vertex_count();

        if self.normals.len() != n * 3 {
            return Err(SartorError::InvalidMesh(format!(
                "Normal array length ({}) != vertex count × 3 ({})",
                self.normals.len(),
                n * 3
            )));
        }
        if self.uvs.len() != n * 2 {
            return Err(SartorError::InvalidMesh(format!(
                "UV array length ({}) != vertex count × 2 ({})",
                self.uvs.len(),
                n * 2
            )));
        }
        if self.face_indices.len() % 3 != 0 {
            return Err(SartorError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.face_indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(SartorError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(SartorError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        if self.metadata.vertex_count != n {
            return Err(SartorError::InvalidMesh(format!(
                "Metadata vertex count ({}) != buffer vertex count ({})",
                self.metadata.vertex_count, n
            )));
        }

        Ok(())
    }
}
