//! Attachment constraint generation and per-step application.
//!
//! Collar and waistband patterns fix the whole top row of the grid to
//! attachment points computed from body landmarks; side patterns add
//! soft constraints at quarter-height intervals down the left and
//! right edges, targeting the same attachment-point function.

use glam::Vec3;
use sartor_garment::{AttachmentKind, BodyDescriptor, GarmentPattern};
use sartor_mesh::GridTopology;
use sartor_types::constants::{
    ATTACHMENT_SPAN_RATIO, SHOULDER_HEIGHT_RATIO, WAIST_HEIGHT_RATIO,
};
use sartor_types::VertexId;

use crate::state::{Constraint, ConstraintKind, SimState};

/// Pull strength for soft side constraints.
const SIDE_STRENGTH: f32 = 0.5;

/// Computes the attachment point for normalized garment coordinates
/// `(u, v)` — `u` across the garment, `v` down from the anchor row.
///
/// The anchor row sits at shoulder height for collar patterns and at
/// waist height for waistband patterns; the row spans slightly less
/// than the garment width (the collar hugs the neckline). Side targets
/// follow the garment edge down from the anchor.
pub fn attachment_point(body: &BodyDescriptor, pattern: &GarmentPattern, u: f32, v: f32) -> Vec3 {
    let body = body.sanitized();
    let anchor_ratio = if pattern.has_attachment(AttachmentKind::Waistband) {
        WAIST_HEIGHT_RATIO
    } else {
        SHOULDER_HEIGHT_RATIO
    };

    let span = pattern.width * body.scale * body.build.width_factor() * ATTACHMENT_SPAN_RATIO;
    let x = (u - 0.5) * span;
    let y = anchor_ratio * body.scale - v * pattern.height * body.scale;
    let z = pattern.depth * body.scale / 2.0;

    Vec3::new(x, y, z)
}

/// Generates the constraint set for a grid + pattern + body.
///
/// - Collar or waistband category ⇒ every top-row vertex becomes a
///   fixed constraint.
/// - Side category ⇒ left/right edge vertices at quarter-height
///   intervals become soft constraints (strength 0.5).
pub fn generate_constraints(
    grid: &GridTopology,
    body: &BodyDescriptor,
    pattern: &GarmentPattern,
) -> Vec<Constraint> {
    let mut constraints = Vec::new();

    let anchored = pattern.has_attachment(AttachmentKind::Collar)
        || pattern.has_attachment(AttachmentKind::Waistband);

    if anchored {
        for i in 0..grid.res_x {
            let u = grid.uv_u[grid.index(i, 0)];
            let target = attachment_point(body, pattern, u, 0.0);
            constraints.push(Constraint {
                vertex: VertexId(grid.index(i, 0) as u32),
                kind: ConstraintKind::Fixed,
                target: target.to_array(),
                strength: 1.0,
            });
        }
    }

    if pattern.has_attachment(AttachmentKind::Side) {
        // Quarter-height rows: 1/4, 1/2, 3/4 of the way down.
        for quarter in 1..4usize {
            let j = quarter * (grid.res_y - 1) / 4;
            if j == 0 {
                continue; // Already fixed by the anchor row.
            }
            for i in [0, grid.res_x - 1] {
                let vi = grid.index(i, j);
                let u = grid.uv_u[vi];
                let v = grid.uv_v[vi];
                let target = attachment_point(body, pattern, u, v);
                constraints.push(Constraint {
                    vertex: VertexId(vi as u32),
                    kind: ConstraintKind::Soft,
                    target: target.to_array(),
                    strength: SIDE_STRENGTH,
                });
            }
        }
    }

    constraints
}

/// Applies all constraints to the state after an integration step.
///
/// Fixed constraints snap the vertex to its target and zero its
/// velocity; soft constraints nudge the position toward the target by
/// `strength × dt`. Returns the number of constraints applied.
pub fn apply_constraints(state: &mut SimState, dt: f32) -> u32 {
    let mut applied = 0u32;

    // The constraint list is immutable during a run; split borrows by
    // iterating indices.
    for ci in 0..state.constraints.len() {
        let c = state.constraints[ci];
        let i = c.vertex.index();
        match c.kind {
            ConstraintKind::Fixed => {
                state.pos_x[i] = c.target[0];
                state.pos_y[i] = c.target[1];
                state.pos_z[i] = c.target[2];
                state.vel_x[i] = 0.0;
                state.vel_y[i] = 0.0;
                state.vel_z[i] = 0.0;
            }
            ConstraintKind::Soft => {
                let pull = c.strength * dt;
                state.pos_x[i] += (c.target[0] - state.pos_x[i]) * pull;
                state.pos_y[i] += (c.target[1] - state.pos_y[i]) * pull;
                state.pos_z[i] += (c.target[2] - state.pos_z[i]) * pull;
            }
        }
        applied += 1;
    }

    applied
}
