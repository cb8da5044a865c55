//! Fabric material presets.
//!
//! All coefficients are normalized to [0, 1] and map directly onto the
//! force-model terms: `stiffness` scales the linear spring branch,
//! `stretch` reduces stretch resistance, `bending_resistance` scales
//! the curvature term, `wrinkle_resistance` suppresses the wrinkle
//! perturbation, and `density` sets per-vertex mass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Normalized fabric coefficients for the force model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricMaterial {
    /// Fabric class name (e.g. "cotton").
    pub name: String,

    /// Linear spring stiffness. Higher = tauter cloth.
    pub stiffness: f32,

    /// Stretchiness. Higher = less stretch resistance.
    pub stretch: f32,

    /// Drape tendency. Higher = softer fall. Reserved for the
    /// rendering layer's shading hints; the simulation expresses drape
    /// through `stiffness` and `bending_resistance`.
    pub drape: f32,

    /// Resistance to folding. Scales the curvature force.
    pub bending_resistance: f32,

    /// Resistance to wrinkling. Suppresses the wrinkle perturbation.
    pub wrinkle_resistance: f32,

    /// Areal density, normalized. Sets per-vertex mass.
    pub density: f32,
}

impl FabricMaterial {
    /// Mass of a single simulated vertex (kg) for this fabric.
    ///
    /// Linear in normalized density; strictly positive even for the
    /// lightest fabrics.
    pub fn vertex_mass(&self) -> f32 {
        0.02 + 0.08 * self.density
    }
}

/// A named registry of fabric presets.
///
/// Fabrics are looked up by class name (e.g. "cotton", "silk").
/// Custom fabrics can be registered at runtime.
#[derive(Debug, Clone)]
pub struct FabricLibrary {
    fabrics: HashMap<String, FabricMaterial>,
}

impl FabricLibrary {
    /// Creates a library with the five built-in fabric classes.
    pub fn with_defaults() -> Self {
        let mut lib = Self {
            fabrics: HashMap::new(),
        };

        lib.register(cotton());
        lib.register(silk());
        lib.register(denim());
        lib.register(jersey());
        lib.register(chiffon());

        lib
    }

    /// Creates an empty library.
    pub fn empty() -> Self {
        Self {
            fabrics: HashMap::new(),
        }
    }

    /// Registers a fabric. Overwrites if the name already exists.
    pub fn register(&mut self, fabric: FabricMaterial) {
        self.fabrics.insert(fabric.name.clone(), fabric);
    }

    /// Looks up a fabric by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&FabricMaterial> {
        self.fabrics.get(name)
    }

    /// Returns all registered fabric names.
    pub fn names(&self) -> Vec<&str> {
        self.fabrics.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of registered fabrics.
    pub fn len(&self) -> usize {
        self.fabrics.len()
    }

    /// Returns true if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.fabrics.is_empty()
    }
}

impl Default for FabricLibrary {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Fabric Classes ──────────────────────────────────────────

/// Cotton — medium-weight all-rounder. Holds shape with defined folds.
pub fn cotton() -> FabricMaterial {
    FabricMaterial {
        name: "cotton".into(),
        stiffness: 0.75,
        stretch: 0.25,
        drape: 0.50,
        bending_resistance: 0.50,
        wrinkle_resistance: 0.55,
        density: 0.50,
    }
}

/// Silk — light and flowing, many small folds.
pub fn silk() -> FabricMaterial {
    FabricMaterial {
        name: "silk".into(),
        stiffness: 0.45,
        stretch: 0.35,
        drape: 0.85,
        bending_resistance: 0.15,
        wrinkle_resistance: 0.35,
        density: 0.20,
    }
}

/// Denim — heavy and stiff, sharp creases, barely stretches.
pub fn denim() -> FabricMaterial {
    FabricMaterial {
        name: "denim".into(),
        stiffness: 0.95,
        stretch: 0.10,
        drape: 0.20,
        bending_resistance: 0.85,
        wrinkle_resistance: 0.75,
        density: 0.90,
    }
}

/// Jersey — stretchy knit with a soft fall.
pub fn jersey() -> FabricMaterial {
    FabricMaterial {
        name: "jersey".into(),
        stiffness: 0.40,
        stretch: 0.75,
        drape: 0.65,
        bending_resistance: 0.25,
        wrinkle_resistance: 0.50,
        density: 0.45,
    }
}

/// Chiffon — ultra-light and sheer, minimal structure.
pub fn chiffon() -> FabricMaterial {
    FabricMaterial {
        name: "chiffon".into(),
        stiffness: 0.30,
        stretch: 0.30,
        drape: 0.95,
        bending_resistance: 0.06,
        wrinkle_resistance: 0.20,
        density: 0.12,
    }
}
