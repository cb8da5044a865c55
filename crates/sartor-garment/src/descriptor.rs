//! Body and garment descriptors — the input contract of the pipeline.
//!
//! These types are supplied by external collaborators (character
//! generation, UI, scripted agents) and are serializable for API
//! transport. Missing fields deserialize to documented defaults.

use serde::{Deserialize, Serialize};

use crate::style::GarmentStyle;

/// Coarse body build classification. Scales garment width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyBuild {
    Slim,
    #[default]
    Average,
    Athletic,
    Heavy,
}

impl BodyBuild {
    /// Horizontal scaling applied to garment width for this build.
    pub fn width_factor(self) -> f32 {
        match self {
            BodyBuild::Slim => 0.92,
            BodyBuild::Average => 1.0,
            BodyBuild::Athletic => 1.08,
            BodyBuild::Heavy => 1.18,
        }
    }
}

/// Description of the body the garment is draped onto.
///
/// `scale` is overall body height relative to the canonical 1.0 body.
/// A missing or non-finite scale defaults to 1.0 — never an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Overall body scale. Defaults to 1.0 when absent.
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Body build classification. Defaults to `Average` when absent.
    #[serde(default)]
    pub build: BodyBuild,
}

fn default_scale() -> f32 {
    1.0
}

impl Default for BodyDescriptor {
    fn default() -> Self {
        Self {
            scale: 1.0,
            build: BodyBuild::Average,
        }
    }
}

impl BodyDescriptor {
    /// Returns a copy with invalid fields replaced by defaults.
    ///
    /// Zero, negative, or non-finite scales become 1.0. Invalid
    /// descriptors are defaulted, never fatal.
    pub fn sanitized(&self) -> Self {
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        };
        Self {
            scale,
            build: self.build,
        }
    }
}

/// Description of the garment to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentDescriptor {
    /// High-level style; resolved to a pattern + fabric by the lookup
    /// table in [`crate::style`].
    #[serde(default)]
    pub style: GarmentStyle,

    /// Garment colors as linear RGB triples. Passed through to the
    /// rendering layer unchanged; the simulation ignores them.
    #[serde(default)]
    pub colors: Vec<[f32; 3]>,
}

impl Default for GarmentDescriptor {
    fn default() -> Self {
        Self {
            style: GarmentStyle::Casual,
            colors: Vec::new(),
        }
    }
}

impl GarmentDescriptor {
    /// Creates a descriptor from a free-form style string.
    ///
    /// Unknown strings fall back to the casual class (shirt pattern,
    /// cotton fabric) — documented behavior, not an error.
    pub fn from_style_name(name: &str) -> Self {
        Self {
            style: GarmentStyle::from_name(name),
            colors: Vec::new(),
        }
    }
}
