//! Mesh extraction — packages final simulation positions into a
//! renderable [`ClothMesh`].
//!
//! The extractor recomputes normals from the deformed geometry, keeps
//! the original grid UVs, and emits two triangles per grid quad:
//! `(res_x − 1) × (res_y − 1) × 2` in total.

use sartor_types::{SartorError, SartorResult};

use crate::grid::GridTopology;
use crate::mesh::{ClothMesh, MeshMetadata};
use crate::normals::compute_vertex_normals;

/// Counts recorded into the extracted mesh's metadata.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionInfo {
    /// Springs in the simulated network.
    pub spring_count: usize,
    /// Attachment constraints applied during the run.
    pub constraint_count: usize,
    /// Integration steps actually executed.
    pub steps_simulated: u32,
}

/// Builds the triangle index list for a grid: two triangles per quad,
/// wound counter-clockwise for a viewer in front of the cloth.
pub fn grid_indices(res_x: usize, res_y: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity((res_x - 1) * (res_y - 1) * 6);
    for j in 0..res_y - 1 {
        for i in 0..res_x - 1 {
            let top_left = (j * res_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + res_x as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            indices.push(top_left);
            indices.push(bot_left);
            indices.push(top_right);

            // Lower-right triangle
            indices.push(top_right);
            indices.push(bot_left);
            indices.push(bot_right);
        }
    }
    indices
}

/// Extracts a renderable mesh from final vertex positions.
///
/// `pos_x/y/z` are the simulation's SoA position buffers; the grid
/// supplies UVs and resolution. With zero steps simulated the output
/// positions are exactly the grid positions (the round-trip property).
pub fn extract_mesh(
    grid: &GridTopology,
    pos_x: &[f32],
    pos_y: &[f32],
    pos_z: &[f32],
    info: ExtractionInfo,
) -> SartorResult<ClothMesh> {
    let n = grid.vertex_count();
    if pos_x.len() != n || pos_y.len() != n || pos_z.len() != n {
        return Err(SartorError::InvalidMesh(format!(
            "Position buffers ({}, {}, {}) do not match grid vertex count ({n})",
            pos_x.len(),
            pos_y.len(),
            pos_z.len(),
        )));
    }

    let mut positions = Vec::with_capacity(n * 3);
    for i in 0..n {
        positions.push(pos_x[i]);
        positions.push(pos_y[i]);
        positions.push(pos_z[i]);
    }

    let mut uvs = Vec::with_capacity(n * 2);
    for i in 0..n {
        uvs.push(grid.uv_u[i]);
        uvs.push(grid.uv_v[i]);
    }

    let face_indices = grid_indices(grid.res_x, grid.res_y);

    let mut normals = Vec::new();
    compute_vertex_normals(&positions, &face_indices, &mut normals);

    let mesh = ClothMesh {
        positions,
        normals,
        uvs,
        face_indices,
        metadata: MeshMetadata {
            vertex_count: n,
            spring_count: info.spring_count,
            constraint_count: info.constraint_count,
            steps_simulated: info.steps_simulated,
            resolution: (grid.res_x, grid.res_y),
        },
    };

    mesh.validate()?;
    Ok(mesh)
}
