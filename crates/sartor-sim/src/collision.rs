//! Body collision — single-sphere approximation.
//!
//! The body is approximated by one sphere at torso height. Vertices
//! inside the sphere receive an outward push force proportional to
//! penetration depth. The single-sphere model is intentional parity
//! with the source system; richer per-limb collision is out of scope.

use glam::Vec3;
use sartor_garment::BodyDescriptor;
use sartor_types::constants::EPSILON;

use crate::config::SimConfig;

/// The approximate body collision sphere for one drape run.
#[derive(Debug, Clone, Copy)]
pub struct BodySphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl BodySphere {
    /// Derives the sphere from the body descriptor: center at torso
    /// height, radius scaled with the body.
    pub fn from_body(body: &BodyDescriptor, config: &SimConfig) -> Self {
        let body = body.sanitized();
        Self {
            center: Vec3::new(0.0, config.collision_center_height * body.scale, 0.0),
            radius: config.collision_radius * body.scale * body.build.width_factor(),
        }
    }

    /// Outward push force for a vertex at `p`, or `None` when the
    /// vertex is outside the sphere.
    ///
    /// A vertex exactly at the center has no defined outward normal;
    /// it is pushed straight up by a full-radius penetration instead of
    /// dividing by zero.
    pub fn push_force(&self, p: Vec3, stiffness: f32) -> Option<Vec3> {
        let delta = p - self.center;
        let dist2 = delta.length_squared();
        let r2 = self.radius * self.radius;
        if dist2 >= r2 {
            return None;
        }

        if dist2 <= EPSILON * EPSILON {
            return Some(Vec3::Y * (self.radius * stiffness));
        }

        let dist = dist2.sqrt();
        let depth = self.radius - dist;
        let normal = delta / dist;
        Some(normal * (depth * stiffness))
    }
}
