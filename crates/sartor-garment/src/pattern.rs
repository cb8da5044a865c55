//! Garment pattern catalog.
//!
//! A pattern names a cloth topology: its base dimensions at body scale
//! 1.0, its seam categories, the attachment (constraint-point)
//! categories that anchor it to the body, and the nominal vertex count
//! the topology builder aims for before adaptive LOD.

use serde::{Deserialize, Serialize};

/// Seam categories present in a pattern. Seams are metadata for the
/// rendering/tailoring layer; the simulation does not treat seam
/// vertices specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamKind {
    Shoulder,
    Side,
    Sleeve,
    Hem,
}

/// Attachment categories — where the pattern anchors to the body.
///
/// `Collar` and `Waistband` produce fixed constraints along the top
/// row; `Side` produces soft constraints down the left/right edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Collar,
    Waistband,
    Side,
}

/// A named cloth topology with seam and attachment metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentPattern {
    /// Topology id (e.g. "shirt").
    pub name: String,

    /// Seam categories present in this pattern.
    pub seams: Vec<SeamKind>,

    /// Attachment categories that generate constraints.
    pub attachments: Vec<AttachmentKind>,

    /// Target vertex count before the performance ceiling is applied.
    /// The topology builder derives a square-ish grid resolution from
    /// this (⌊√n⌋ per side).
    pub nominal_vertices: usize,

    /// Base garment width in meters at body scale 1.0.
    pub width: f32,

    /// Base garment height (drop) in meters at body scale 1.0.
    pub height: f32,

    /// Base garment depth in meters at body scale 1.0. Positions the
    /// cloth plane in front of the body center.
    pub depth: f32,
}

impl GarmentPattern {
    /// Looks up a pattern by name.
    ///
    /// Unknown names fall back to the shirt pattern — this is the
    /// documented default for unrecognized topologies, not an error.
    pub fn by_name(name: &str) -> GarmentPattern {
        match name.trim().to_ascii_lowercase().as_str() {
            "shirt" => shirt(),
            "dress" => dress(),
            "skirt" => skirt(),
            "cape" => cape(),
            _ => shirt(),
        }
    }

    /// Names of all built-in patterns.
    pub fn names() -> &'static [&'static str] {
        &["shirt", "dress", "skirt", "cape"]
    }

    /// Returns true if this pattern carries the given attachment kind.
    pub fn has_attachment(&self, kind: AttachmentKind) -> bool {
        self.attachments.contains(&kind)
    }
}

// ─── Built-in Pattern Catalog ─────────────────────────────────────────

/// Shirt — torso panel hung from the collar, 20×20 at nominal density.
pub fn shirt() -> GarmentPattern {
    GarmentPattern {
        name: "shirt".into(),
        seams: vec![SeamKind::Shoulder, SeamKind::Side, SeamKind::Sleeve],
        attachments: vec![AttachmentKind::Collar, AttachmentKind::Side],
        nominal_vertices: 400,
        width: 0.90,
        height: 1.15,
        depth: 0.30,
    }
}

/// Dress — longer drop, denser grid, collar-anchored.
pub fn dress() -> GarmentPattern {
    GarmentPattern {
        name: "dress".into(),
        seams: vec![SeamKind::Shoulder, SeamKind::Side, SeamKind::Hem],
        attachments: vec![AttachmentKind::Collar, AttachmentKind::Side],
        nominal_vertices: 900,
        width: 1.00,
        height: 1.80,
        depth: 0.35,
    }
}

/// Skirt — waistband-anchored lower panel.
pub fn skirt() -> GarmentPattern {
    GarmentPattern {
        name: "skirt".into(),
        seams: vec![SeamKind::Side, SeamKind::Hem],
        attachments: vec![AttachmentKind::Waistband, AttachmentKind::Side],
        nominal_vertices: 400,
        width: 0.95,
        height: 0.85,
        depth: 0.32,
    }
}

/// Cape — wide free-hanging panel, collar only (no side anchors).
pub fn cape() -> GarmentPattern {
    GarmentPattern {
        name: "cape".into(),
        seams: vec![SeamKind::Shoulder, SeamKind::Hem],
        attachments: vec![AttachmentKind::Collar],
        nominal_vertices: 576,
        width: 1.40,
        height: 1.50,
        depth: 0.25,
    }
}
