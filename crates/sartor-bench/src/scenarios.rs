//! Benchmark scenarios — descriptor pairs + config for each test case.
//!
//! Four canonical scenarios spanning the pattern and fabric catalog:
//! 1. **Casual shirt** — the baseline 20×20 cotton drape
//! 2. **Formal dress** — densest built-in grid, silk
//! 3. **Sporty tee** — stretchy jersey on a heavy build
//! 4. **Elegant drape** — chiffon at doubled step count

use serde::{Deserialize, Serialize};

use sartor_garment::{BodyBuild, BodyDescriptor, GarmentDescriptor, GarmentStyle};
use sartor_sim::SimConfig;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Cotton shirt on a canonical body.
    CasualShirt,
    /// Silk dress — the densest built-in grid.
    FormalDress,
    /// Jersey shirt on a heavy build.
    SportyTee,
    /// Chiffon, two simulated seconds.
    ElegantDrape,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::CasualShirt,
            ScenarioKind::FormalDress,
            ScenarioKind::SportyTee,
            ScenarioKind::ElegantDrape,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::CasualShirt => "casual_shirt",
            ScenarioKind::FormalDress => "formal_dress",
            ScenarioKind::SportyTee => "sporty_tee",
            ScenarioKind::ElegantDrape => "elegant_drape",
        }
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Body the garment drapes onto.
    pub body: BodyDescriptor,
    /// Garment to generate.
    pub garment: GarmentDescriptor,
    /// Simulation configuration.
    pub config: SimConfig,
}

impl Scenario {
    /// The baseline: casual style, scale 1.0 — a 20×20 cotton shirt
    /// for one simulated second.
    pub fn casual_shirt() -> Self {
        Self {
            kind: ScenarioKind::CasualShirt,
            body: BodyDescriptor::default(),
            garment: GarmentDescriptor {
                style: GarmentStyle::Casual,
                colors: vec![[0.35, 0.45, 0.80]],
            },
            config: SimConfig::default(),
        }
    }

    /// Formal dress: the 900-vertex pattern, silk fabric.
    pub fn formal_dress() -> Self {
        Self {
            kind: ScenarioKind::FormalDress,
            body: BodyDescriptor {
                scale: 1.05,
                build: BodyBuild::Slim,
            },
            garment: GarmentDescriptor {
                style: GarmentStyle::Formal,
                colors: vec![[0.10, 0.10, 0.12]],
            },
            config: SimConfig::default(),
        }
    }

    /// Sporty tee: high-stretch jersey on a heavy build.
    pub fn sporty_tee() -> Self {
        Self {
            kind: ScenarioKind::SportyTee,
            body: BodyDescriptor {
                scale: 1.0,
                build: BodyBuild::Heavy,
            },
            garment: GarmentDescriptor {
                style: GarmentStyle::Sporty,
                colors: vec![[0.90, 0.25, 0.20]],
            },
            config: SimConfig::default(),
        }
    }

    /// Elegant drape: chiffon with a doubled step count so the light
    /// fabric actually settles.
    pub fn elegant_drape() -> Self {
        Self {
            kind: ScenarioKind::ElegantDrape,
            body: BodyDescriptor::default(),
            garment: GarmentDescriptor {
                style: GarmentStyle::Elegant,
                colors: vec![[0.85, 0.80, 0.70]],
            },
            config: SimConfig::quality(),
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::CasualShirt => Self::casual_shirt(),
            ScenarioKind::FormalDress => Self::formal_dress(),
            ScenarioKind::SportyTee => Self::sporty_tee(),
            ScenarioKind::ElegantDrape => Self::elegant_drape(),
        }
    }
}
