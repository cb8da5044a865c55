//! Vertex normal computation from triangle data.
//!
//! Computes area-weighted vertex normals by accumulating face normals
//! from each adjacent triangle — every grid quad contributes its two
//! triangles to the four surrounding vertices.

/// Recompute unit vertex normals from interleaved positions and a
/// triangle index list, writing into `normals` (resized to match).
///
/// Each triangle's face normal (weighted by its area) is accumulated at
/// each of its vertices, then normalized. Degenerate triangles
/// contribute a zero vector and are effectively skipped.
pub fn compute_vertex_normals(positions: &[f32], indices: &[u32], normals: &mut Vec<f32>) {
    let n = positions.len() / 3;
    normals.clear();
    normals.resize(n * 3, 0.0);

    for tri in indices.chunks_exact(3) {
        let a = tri[0] as usize * 3;
        let b = tri[1] as usize * 3;
        let c = tri[2] as usize * 3;

        // Edge vectors
        let e1x = positions[b] - positions[a];
        let e1y = positions[b + 1] - positions[a + 1];
        let e1z = positions[b + 2] - positions[a + 2];

        let e2x = positions[c] - positions[a];
        let e2y = positions[c + 1] - positions[a + 1];
        let e2z = positions[c + 2] - positions[a + 2];

        // Cross product (magnitude = 2 × triangle area)
        let nx = e1y * e2z - e1z * e2y;
        let ny = e1z * e2x - e1x * e2z;
        let nz = e1x * e2y - e1y * e2x;

        for &base in &[a, b, c] {
            normals[base] += nx;
            normals[base + 1] += ny;
            normals[base + 2] += nz;
        }
    }

    // Normalize
    for i in 0..n {
        let base = i * 3;
        let x = normals[base];
        let y = normals[base + 1];
        let z = normals[base + 2];
        let len = (x * x + y * y + z * z).sqrt();
        if len > 1e-10 {
            let inv = 1.0 / len;
            normals[base] = x * inv;
            normals[base + 1] = y * inv;
            normals[base + 2] = z * inv;
        }
    }
}
