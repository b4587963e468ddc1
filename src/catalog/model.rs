//! Plain-data catalog entries and the host capability probe.
//!
//! A [`KindDeclaration`] is the static input triple the surrounding library
//! hands to registry construction; a [`KindVariant`] is the constructed entry
//! after the host has been probed. Absence of a capability is ordinary data
//! here, never an error: hosts legitimately lack kinds that newer or older
//! versions define.

use crate::catalog::identity::{CapabilityKey, ImplHandle, KindName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// One statically declared kind: its name, the lookup string probed against
/// the host capability set, and the behavior implementation bound to it.
#[derive(Clone, Copy, Debug)]
pub struct KindDeclaration {
    pub name: &'static str,
    pub capability_lookup: &'static str,
    pub implementation: &'static str,
}

/// One constructed catalog entry.
///
/// `capability` and `implementation` are both `None` when the host's
/// capability probe failed for this kind at construction time; that state is
/// fixed for the life of the process.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KindVariant {
    pub name: KindName,
    pub capability: Option<CapabilityKey>,
    pub implementation: Option<ImplHandle>,
}

impl KindVariant {
    /// True iff the capability key and implementation handle both resolved.
    ///
    /// Consumers check this before dispatching to a variant's implementation;
    /// an unavailable variant stays unavailable for the process lifetime, so
    /// there is nothing to retry.
    pub fn is_available(&self) -> bool {
        self.capability.is_some() && self.implementation.is_some()
    }
}

// Identity is the name alone; capability and implementation are derived
// bindings, not identity.
impl PartialEq for KindVariant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for KindVariant {}

impl Hash for KindVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Host-side capability set consumed by registry construction.
///
/// `resolve` answers "does this host version define this kind?" by mapping a
/// declared lookup string to the host's own key for it. Returning `None` is
/// the expected way to report an unsupported kind.
pub trait HostCapabilities {
    fn resolve(&self, lookup: &str) -> Option<CapabilityKey>;
}

/// Host capability set backed by a fixed list of supported lookup strings.
///
/// Resolved keys echo the lookup string. Real embedders adapt their own
/// version tables behind [`HostCapabilities`]; this implementation covers
/// tests and hosts whose capability set is a plain name list.
#[derive(Clone, Debug, Default)]
pub struct StaticCapabilities {
    supported: BTreeSet<String>,
}

impl StaticCapabilities {
    pub fn new<I, S>(supported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: supported.into_iter().map(Into::into).collect(),
        }
    }
}

impl HostCapabilities for StaticCapabilities {
    fn resolve(&self, lookup: &str) -> Option<CapabilityKey> {
        self.supported
            .contains(lookup)
            .then(|| CapabilityKey(lookup.to_string()))
    }
}

macro_rules! kind {
    ($name:literal, $implementation:literal) => {
        KindDeclaration {
            name: $name,
            capability_lookup: $name,
            implementation: $implementation,
        }
    };
}

/// The full built-in kind table, in declaration order.
///
/// Capability lookup strings equal the kind names; hosts that predate or
/// postdate a kind simply fail its probe and the variant is carried as
/// unavailable.
pub const BUILTIN_KINDS: &[KindDeclaration] = &[
    kind!("DROPPED_ITEM", "NpcItem"),
    kind!("EXPERIENCE_ORB", "NpcExperienceOrb"),
    kind!("HUSK", "NpcHusk"),
    kind!("ARMOR_STAND", "NpcArmorStand"),
    kind!("CREEPER", "NpcCreeper"),
    kind!("SKELETON", "NpcSkeleton"),
    kind!("SPIDER", "NpcSpider"),
    kind!("GIANT", "NpcGiant"),
    kind!("ZOMBIE", "NpcZombie"),
    kind!("SLIME", "NpcSlime"),
    kind!("GHAST", "NpcGhast"),
    kind!("PIG_ZOMBIE", "NpcPigZombie"),
    kind!("ENDERMAN", "NpcEnderman"),
    kind!("CAVE_SPIDER", "NpcCaveSpider"),
    kind!("ENDER_DRAGON", "NpcEnderDragon"),
    kind!("WITHER", "NpcWither"),
    kind!("WITCH", "NpcWitch"),
    kind!("ENDERMITE", "NpcEndermite"),
    kind!("GUARDIAN", "NpcGuardian"),
    kind!("SHULKER", "NpcShulker"),
    kind!("PIG", "NpcPig"),
    kind!("SHEEP", "NpcSheep"),
    kind!("COW", "NpcCow"),
    kind!("CHICKEN", "NpcChicken"),
    kind!("SQUID", "NpcSquid"),
    kind!("WOLF", "NpcWolf"),
    kind!("MUSHROOM_COW", "NpcMushroomCow"),
    kind!("SNOWMAN", "NpcSnowman"),
    kind!("OCELOT", "NpcOcelot"),
    kind!("IRON_GOLEM", "NpcIronGolem"),
    kind!("HORSE", "NpcHorse"),
    kind!("RABBIT", "NpcRabbit"),
    kind!("POLAR_BEAR", "NpcPolarBear"),
    kind!("LLAMA", "NpcLlama"),
    kind!("VILLAGER", "NpcVillager"),
    kind!("PLAYER", "NpcPlayer"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn builtin_table_has_unique_names_and_implementations() {
        let names: BTreeSet<&str> = BUILTIN_KINDS.iter().map(|k| k.name).collect();
        assert_eq!(names.len(), BUILTIN_KINDS.len());

        let impls: BTreeSet<&str> = BUILTIN_KINDS.iter().map(|k| k.implementation).collect();
        assert_eq!(impls.len(), BUILTIN_KINDS.len());
    }

    #[test]
    fn builtin_names_are_uppercase_identifiers() {
        for decl in BUILTIN_KINDS {
            assert!(
                decl.name
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '_'),
                "unexpected kind name {}",
                decl.name
            );
            assert_eq!(decl.capability_lookup, decl.name);
        }
    }

    #[test]
    fn static_capabilities_resolve_supported_lookups_only() {
        let host = StaticCapabilities::new(["ZOMBIE", "PIG"]);
        assert_eq!(host.resolve("ZOMBIE"), Some(CapabilityKey("ZOMBIE".into())));
        assert_eq!(host.resolve("SHULKER"), None);
    }

    #[test]
    fn variant_identity_is_the_name() {
        let bound = KindVariant {
            name: KindName("ZOMBIE".into()),
            capability: Some(CapabilityKey("ZOMBIE".into())),
            implementation: Some(ImplHandle("NpcZombie".into())),
        };
        let unbound = KindVariant {
            name: KindName("ZOMBIE".into()),
            capability: None,
            implementation: None,
        };
        assert_eq!(bound, unbound);
        assert!(bound.is_available());
        assert!(!unbound.is_available());
    }
}
