//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default number of integration steps per drape request
/// (one simulated second at 60 Hz).
pub const DEFAULT_STEPS: u32 = 60;

/// Default performance ceiling on simulated vertices. Patterns whose
/// nominal density would exceed this are downsampled, never rejected.
pub const DEFAULT_MAX_VERTICES: usize = 2000;

/// Default number of past frames retained for derivative force terms.
pub const DEFAULT_TEMPORAL_MEMORY: usize = 8;

/// Curvature threshold (radians) above which the wrinkle perturbation
/// activates.
pub const DEFAULT_WRINKLE_THRESHOLD: f32 = 0.1;

/// Default blend weight for the linear (spring + damping) force branch.
pub const DEFAULT_BLEND_LINEAR: f32 = 0.5;

/// Default blend weight for the nonlinear (bending + stretch + wrinkle)
/// force branch.
pub const DEFAULT_BLEND_NONLINEAR: f32 = 0.3;

/// Default blend weight for the temporal (velocity-derivative) branch.
pub const DEFAULT_BLEND_TEMPORAL: f32 = 0.2;

/// Shoulder height of the approximate body, as a ratio of body scale.
/// Collar attachment points anchor here.
pub const SHOULDER_HEIGHT_RATIO: f32 = 1.45;

/// Waist height of the approximate body, as a ratio of body scale.
/// Waistband attachment points anchor here.
pub const WAIST_HEIGHT_RATIO: f32 = 0.95;

/// Fraction of the garment width spanned by the attachment row.
/// The collar/waistband sits slightly inside the garment edges.
pub const ATTACHMENT_SPAN_RATIO: f32 = 0.85;

/// Epsilon for degenerate-distance guards. Neighbor distances below
/// this are skipped rather than divided by.
pub const EPSILON: f32 = 1.0e-7;
