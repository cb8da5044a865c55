//! Style → (pattern, fabric) lookup.
//!
//! The lookup table is deterministic: each style maps to a fixed fabric
//! class and either a single pattern or a short candidate list. Styles
//! with multiple candidates pick one through the caller's seedable RNG,
//! so the whole resolution stays reproducible under a fixed seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::material::{self, FabricMaterial};
use crate::pattern::{self, GarmentPattern};

/// High-level garment style supplied by the surrounding application.
///
/// | Style    | Pattern candidates | Fabric  |
/// |----------|--------------------|---------|
/// | Casual   | shirt              | cotton  |
/// | Formal   | dress              | silk    |
/// | Sporty   | shirt              | jersey  |
/// | Elegant  | dress, skirt       | chiffon |
/// | Bohemian | cape, skirt        | cotton  |
///
/// Unknown style strings parse to `Casual` (shirt + cotton) — the
/// documented fallback, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GarmentStyle {
    #[default]
    Casual,
    Formal,
    Sporty,
    Elegant,
    Bohemian,
}

impl GarmentStyle {
    /// Parses a free-form style string, case-insensitively.
    ///
    /// Unrecognized strings fall back to `Casual`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "casual" => GarmentStyle::Casual,
            "formal" => GarmentStyle::Formal,
            "sporty" => GarmentStyle::Sporty,
            "elegant" => GarmentStyle::Elegant,
            "bohemian" => GarmentStyle::Bohemian,
            _ => GarmentStyle::Casual,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            GarmentStyle::Casual => "casual",
            GarmentStyle::Formal => "formal",
            GarmentStyle::Sporty => "sporty",
            GarmentStyle::Elegant => "elegant",
            GarmentStyle::Bohemian => "bohemian",
        }
    }

    /// Pattern names this style may resolve to, in table order.
    pub fn pattern_candidates(&self) -> &'static [&'static str] {
        match self {
            GarmentStyle::Casual => &["shirt"],
            GarmentStyle::Formal => &["dress"],
            GarmentStyle::Sporty => &["shirt"],
            GarmentStyle::Elegant => &["dress", "skirt"],
            GarmentStyle::Bohemian => &["cape", "skirt"],
        }
    }

    /// Fabric class this style resolves to.
    pub fn fabric(&self) -> FabricMaterial {
        match self {
            GarmentStyle::Casual => material::cotton(),
            GarmentStyle::Formal => material::silk(),
            GarmentStyle::Sporty => material::jersey(),
            GarmentStyle::Elegant => material::chiffon(),
            GarmentStyle::Bohemian => material::cotton(),
        }
    }
}

/// Resolves a style to a concrete pattern + fabric.
///
/// Single-candidate styles never touch the RNG; multi-candidate styles
/// draw exactly one index from it, so resolution is reproducible under
/// a fixed seed.
pub fn resolve_style<R: Rng>(style: GarmentStyle, rng: &mut R) -> (GarmentPattern, FabricMaterial) {
    let candidates = style.pattern_candidates();
    let name = if candidates.len() == 1 {
        candidates[0]
    } else {
        candidates[rng.gen_range(0..candidates.len())]
    };
    (pattern::GarmentPattern::by_name(name), style.fabric())
}
