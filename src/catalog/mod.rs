//! Kind catalog wiring.
//!
//! This module holds the fixed catalog of NPC kinds and everything derived
//! from it: identifier newtypes, the declaration table, registry construction
//! with host capability probing, and text resolution. Callers use
//! [`KindRegistry`] for all lookups; the plain-data types exist so embedders
//! and config layers can name kinds without going through the registry.

pub mod identity;
pub mod index;
pub mod model;
pub mod resolve;

pub use identity::{CapabilityKey, ImplHandle, KindName};
pub use index::{KindRegistry, RegistryError};
pub use model::{
    BUILTIN_KINDS, HostCapabilities, KindDeclaration, KindVariant, StaticCapabilities,
};
