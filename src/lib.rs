//! Kind registry for the NPC library.
//!
//! The crate exposes a fixed catalog of NPC kinds, each bound to one named
//! behavior implementation, with reverse lookup by host capability key or
//! implementation handle and fuzzy resolution from user-supplied text. The
//! registry is built once, at library initialization, by probing the host's
//! capability set; kinds the host version lacks are carried as unavailable
//! rather than dropped, so enumeration and help output stay complete.
//!
//! Construction is the only fallible or effectful step. Everything after it
//! is a pure read over immutable data, safe to share across threads without
//! coordination.

pub mod catalog;

pub use catalog::{
    BUILTIN_KINDS, CapabilityKey, HostCapabilities, ImplHandle, KindDeclaration, KindName,
    KindRegistry, KindVariant, RegistryError, StaticCapabilities,
};
