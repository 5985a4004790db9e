//! Core contracts shared by the lodeforge crates.
//!
//! This crate defines material handles and weighted material lists, the
//! external material lookup capability, restriction modes, and the error
//! taxonomy reported while compiling generation rules.

pub mod error;
pub mod lookup;
pub mod material;
pub mod restriction;

pub use error::{CompileError, Result};
pub use lookup::{MaterialCatalog, MaterialLookup};
pub use material::{
    DEFAULT_METADATA, DEFAULT_WEIGHT, MAX_METADATA, MAX_WEIGHT, MIN_WEIGHT, MaterialHandle,
    MaterialId, MaterialList, WeightedMaterial, clamp_metadata, clamp_weight,
};
pub use restriction::RestrictionMode;

/// Namespace applied to identifiers written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Substrate used when a rule omits its `material` list.
pub const DEFAULT_SUBSTRATE: &str = "minecraft:stone";
