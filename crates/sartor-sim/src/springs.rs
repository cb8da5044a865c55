//! Spring network builder.
//!
//! Derives the four-tier spring graph from grid adjacency. Per cell
//! (x, y): one horizontal and one vertical structural spring (rest =
//! base unit), one diagonal shear spring (rest = base unit × √2), and
//! bending springs two cells away horizontally and vertically (rest =
//! base unit × 2). The resulting network is O(4·V) springs and is what
//! gives the cloth simultaneous resistance to stretch, shear, and
//! folding.

use sartor_types::VertexId;

use crate::state::{Spring, SpringKind};

/// Builds the spring network for a `res_x × res_y` grid with the given
/// base rest unit.
pub fn build_springs(res_x: usize, res_y: usize, spacing: f32) -> Vec<Spring> {
    let idx = |x: usize, y: usize| VertexId((y * res_x + x) as u32);
    let diag = spacing * std::f32::consts::SQRT_2;
    let bend = spacing * 2.0;

    // 2 structural + 1 shear + 2 bending per interior cell.
    let mut springs = Vec::with_capacity(res_x * res_y * 5);

    for y in 0..res_y {
        for x in 0..res_x {
            // Structural: right and down.
            if x + 1 < res_x {
                springs.push(Spring {
                    a: idx(x, y),
                    b: idx(x + 1, y),
                    rest: spacing,
                    kind: SpringKind::Structural,
                });
            }
            if y + 1 < res_y {
                springs.push(Spring {
                    a: idx(x, y),
                    b: idx(x, y + 1),
                    rest: spacing,
                    kind: SpringKind::Structural,
                });
            }

            // Shear: down-right diagonal.
            if x + 1 < res_x && y + 1 < res_y {
                springs.push(Spring {
                    a: idx(x, y),
                    b: idx(x + 1, y + 1),
                    rest: diag,
                    kind: SpringKind::Shear,
                });
            }

            // Bending: two cells right and two cells down.
            if x + 2 < res_x {
                springs.push(Spring {
                    a: idx(x, y),
                    b: idx(x + 2, y),
                    rest: bend,
                    kind: SpringKind::Bending,
                });
            }
            if y + 2 < res_y {
                springs.push(Spring {
                    a: idx(x, y),
                    b: idx(x, y + 2),
                    rest: bend,
                    kind: SpringKind::Bending,
                });
            }
        }
    }

    springs
}

/// Spring counts per tier, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpringBreakdown {
    pub structural: usize,
    pub shear: usize,
    pub bending: usize,
}

impl SpringBreakdown {
    /// Tallies a spring list by tier.
    pub fn of(springs: &[Spring]) -> Self {
        let mut breakdown = SpringBreakdown {
            structural: 0,
            shear: 0,
            bending: 0,
        };
        for s in springs {
            match s.kind {
                SpringKind::Structural => breakdown.structural += 1,
                SpringKind::Shear => breakdown.shear += 1,
                SpringKind::Bending => breakdown.bending += 1,
            }
        }
        breakdown
    }

    /// Total spring count.
    pub fn total(&self) -> usize {
        self.structural + self.shear + self.bending
    }
}
