//! # sartor-garment
//!
//! The consumed-input side of the draping core: body and garment
//! descriptors supplied by the surrounding application, the garment
//! pattern catalog, the fabric material presets, and the style →
//! (pattern, fabric) lookup.
//!
//! Everything here is deliberately forgiving: unknown style and pattern
//! names fall back to documented defaults, and out-of-range descriptor
//! fields are clamped rather than rejected. The only fatal input
//! condition in the whole pipeline (a degenerate topology) is detected
//! downstream, in the topology builder.

pub mod descriptor;
pub mod material;
pub mod pattern;
pub mod style;

pub use descriptor::{BodyBuild, BodyDescriptor, GarmentDescriptor};
pub use material::{FabricLibrary, FabricMaterial};
pub use pattern::{AttachmentKind, GarmentPattern, SeamKind};
pub use style::GarmentStyle;
