//! Grid topology builder.
//!
//! Turns a body descriptor + garment pattern into a rectangular vertex
//! grid: positions laid out in garment dimensions (y decreasing per
//! row from the pattern's anchor height), UVs as normalized grid
//! coordinates. Resolution is square-ish (⌊√n⌋ per side) and bounded
//! by the performance ceiling — patterns that are too dense are
//! downsampled (adaptive LOD), never rejected.

use sartor_garment::{AttachmentKind, BodyDescriptor, GarmentPattern};
use sartor_types::constants::{SHOULDER_HEIGHT_RATIO, WAIST_HEIGHT_RATIO};
use sartor_types::{SartorError, SartorResult};

/// A rectangular cloth vertex grid in SoA layout.
///
/// Immutable after construction; the simulation copies positions into
/// its own state and reads the grid only for adjacency and UVs.
#[derive(Debug, Clone)]
pub struct GridTopology {
    /// Vertices per row.
    pub res_x: usize,
    /// Vertices per column.
    pub res_y: usize,

    /// Horizontal cell size (meters).
    pub cell_x: f32,
    /// Vertical cell size (meters).
    pub cell_y: f32,

    /// Scaled garment width (meters).
    pub width: f32,
    /// Scaled garment height (meters).
    pub height: f32,
    /// Scaled garment depth (meters).
    pub depth: f32,

    /// Y coordinate of the top row (the pattern's anchor height).
    pub anchor_y: f32,

    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// U texture coordinates.
    pub uv_u: Vec<f32>,
    /// V texture coordinates.
    pub uv_v: Vec<f32>,
}

impl GridTopology {
    /// Returns the number of vertices (`res_x × res_y`).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.res_x * self.res_y
    }

    /// Base rest unit for the spring network: the mean cell size.
    ///
    /// Structural springs use this directly; shear and bending springs
    /// use `×√2` and `×2`.
    #[inline]
    pub fn spacing(&self) -> f32 {
        (self.cell_x + self.cell_y) / 2.0
    }

    /// Flat vertex index for grid cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.res_x + x
    }

    /// Position of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn position(&self, i: usize) -> glam::Vec3 {
        glam::Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }
}

/// Builds the vertex grid for a garment on a body.
///
/// Resolution derivation: `res = ⌊√min(nominal, max_vertices)⌋` per
/// side, so the vertex count never exceeds the ceiling. A resolution
/// below 2 per side (or an unnamed pattern) is degenerate and aborts
/// with [`SartorError::InvalidTopology`] before any simulation state
/// exists — the single fatal input condition of the pipeline.
pub fn build_grid(
    body: &BodyDescriptor,
    pattern: &GarmentPattern,
    max_vertices: usize,
) -> SartorResult<GridTopology> {
    let body = body.sanitized();

    if pattern.name.trim().is_empty() {
        return Err(SartorError::InvalidTopology(
            "pattern has an empty topology id".into(),
        ));
    }

    // Adaptive LOD: downsample instead of failing the request.
    let budget = pattern.nominal_vertices.min(max_vertices);
    let res = (budget as f32).sqrt().floor() as usize;
    if res < 2 {
        return Err(SartorError::InvalidTopology(format!(
            "pattern '{}' yields a degenerate {res}x{res} grid \
             (nominal {} vertices, ceiling {max_vertices})",
            pattern.name, pattern.nominal_vertices,
        )));
    }
    let (res_x, res_y) = (res, res);

    let width = pattern.width * body.scale * body.build.width_factor();
    let height = pattern.height * body.scale;
    let depth = pattern.depth * body.scale;

    let anchor_y = anchor_height(pattern) * body.scale;

    let cell_x = width / (res_x - 1) as f32;
    let cell_y = height / (res_y - 1) as f32;
    let half_w = width / 2.0;
    let z = depth / 2.0;

    let n = res_x * res_y;
    let mut pos_x = Vec::with_capacity(n);
    let mut pos_y = Vec::with_capacity(n);
    let mut pos_z = Vec::with_capacity(n);
    let mut uv_u = Vec::with_capacity(n);
    let mut uv_v = Vec::with_capacity(n);

    for j in 0..res_y {
        let v = j as f32 / (res_y - 1) as f32;
        let y = anchor_y - v * height; // Top to bottom
        for i in 0..res_x {
            let u = i as f32 / (res_x - 1) as f32;
            pos_x.push(-half_w + u * width);
            pos_y.push(y);
            pos_z.push(z);
            uv_u.push(u);
            uv_v.push(v);
        }
    }

    Ok(GridTopology {
        res_x,
        res_y,
        cell_x,
        cell_y,
        width,
        height,
        depth,
        anchor_y,
        pos_x,
        pos_y,
        pos_z,
        uv_u,
        uv_v,
    })
}

/// Anchor height (at body scale 1.0) for a pattern: collar patterns
/// hang from the shoulders, waistband patterns from the waist.
fn anchor_height(pattern: &GarmentPattern) -> f32 {
    if pattern.has_attachment(AttachmentKind::Waistband) {
        WAIST_HEIGHT_RATIO
    } else {
        // Collar patterns and anything without an explicit anchor
        // hang from shoulder height.
        SHOULDER_HEIGHT_RATIO
    }
}
