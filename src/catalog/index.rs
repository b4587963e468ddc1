//! Registry construction and indexed lookup.
//!
//! The registry is built exactly once from the static declaration list, in a
//! single pass that probes the host capability set and derives both reverse
//! indices. It is intentionally strict about duplicates so a defective
//! declaration table fails construction instead of silently shadowing an
//! entry. After construction nothing is mutated, so the registry is shared
//! read-only by any number of concurrent callers.

use crate::catalog::identity::{CapabilityKey, ImplHandle, KindName};
use crate::catalog::model::{BUILTIN_KINDS, HostCapabilities, KindDeclaration, KindVariant};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Fatal defect in the static declaration table, caught at construction.
///
/// Every variant here is a programming error in the declarations, not a data
/// condition; callers should treat it as unrecoverable configuration failure.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("kind declaration at position {index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate kind name {name}")]
    DuplicateName { name: KindName },
    #[error("kinds {first} and {second} declare the same capability lookup '{lookup}'")]
    DuplicateLookup {
        lookup: String,
        first: KindName,
        second: KindName,
    },
    #[error("kinds {first} and {second} resolved to the same capability key {key}")]
    DuplicateCapability {
        key: CapabilityKey,
        first: KindName,
        second: KindName,
    },
    #[error("kinds {first} and {second} claim the same implementation {handle}")]
    DuplicateImplementation {
        handle: ImplHandle,
        first: KindName,
        second: KindName,
    },
}

/// Immutable kind catalog plus derived reverse indices.
///
/// `variants` keeps declaration order; the maps hold positions into it so a
/// variant is stored once and every lookup path returns the same entry.
#[derive(Debug)]
pub struct KindRegistry {
    variants: Vec<KindVariant>,
    by_name: BTreeMap<KindName, usize>,
    by_capability: BTreeMap<CapabilityKey, usize>,
    by_implementation: BTreeMap<ImplHandle, usize>,
}

impl KindRegistry {
    /// Construct the registry from a declaration list, probing `host` for
    /// each kind's capability.
    ///
    /// A failed probe is expected degradation: the variant is still added,
    /// with no capability or implementation binding, and a warning names it.
    /// Duplicate names, capability lookups, resolved keys, or implementation
    /// handles abort construction with a [`RegistryError`].
    pub fn build(
        declarations: &[KindDeclaration],
        host: &dyn HostCapabilities,
    ) -> Result<Self, RegistryError> {
        let mut variants: Vec<KindVariant> = Vec::with_capacity(declarations.len());
        let mut by_name: BTreeMap<KindName, usize> = BTreeMap::new();
        let mut by_capability: BTreeMap<CapabilityKey, usize> = BTreeMap::new();
        let mut by_implementation: BTreeMap<ImplHandle, usize> = BTreeMap::new();
        let mut seen_lookups: BTreeMap<&str, usize> = BTreeMap::new();

        for (index, decl) in declarations.iter().enumerate() {
            if decl.name.trim().is_empty() {
                return Err(RegistryError::EmptyName { index });
            }
            let name = KindName(decl.name.to_string());
            if by_name.contains_key(&name) {
                return Err(RegistryError::DuplicateName { name });
            }

            // Two declarations sharing a lookup string is a table defect even
            // when the host supports neither, so check before probing.
            if let Some(&prev) = seen_lookups.get(decl.capability_lookup) {
                return Err(RegistryError::DuplicateLookup {
                    lookup: decl.capability_lookup.to_string(),
                    first: variants[prev].name.clone(),
                    second: name,
                });
            }
            seen_lookups.insert(decl.capability_lookup, index);

            let (capability, implementation) = match host.resolve(decl.capability_lookup) {
                Some(key) => (
                    Some(key),
                    Some(ImplHandle(decl.implementation.to_string())),
                ),
                None => {
                    warn!(kind = %name, "kind is not supported on this host version");
                    (None, None)
                }
            };

            let position = variants.len();
            if let Some(key) = &capability {
                if let Some(&prev) = by_capability.get(key) {
                    return Err(RegistryError::DuplicateCapability {
                        key: key.clone(),
                        first: variants[prev].name.clone(),
                        second: name,
                    });
                }
                by_capability.insert(key.clone(), position);
            }
            if let Some(handle) = &implementation {
                if let Some(&prev) = by_implementation.get(handle) {
                    return Err(RegistryError::DuplicateImplementation {
                        handle: handle.clone(),
                        first: variants[prev].name.clone(),
                        second: name,
                    });
                }
                by_implementation.insert(handle.clone(), position);
            }

            by_name.insert(name.clone(), position);
            variants.push(KindVariant {
                name,
                capability,
                implementation,
            });
        }

        let available = variants.iter().filter(|v| v.is_available()).count();
        debug!(
            total = variants.len(),
            available, "kind registry constructed"
        );

        Ok(Self {
            variants,
            by_name,
            by_capability,
            by_implementation,
        })
    }

    /// Construct the registry over the built-in kind table.
    pub fn builtin(host: &dyn HostCapabilities) -> Result<Self, RegistryError> {
        Self::build(BUILTIN_KINDS, host)
    }

    /// Resolve a variant by its host capability key.
    ///
    /// # Panics
    ///
    /// Panics on an empty key: an empty key cannot have been issued by a
    /// host probe, so passing one is a caller bug, not a lookup miss.
    pub fn for_capability(&self, key: &CapabilityKey) -> Option<&KindVariant> {
        assert!(
            !key.0.is_empty(),
            "capability key passed to for_capability must not be empty"
        );
        self.by_capability.get(key).map(|&i| &self.variants[i])
    }

    /// Resolve a variant by its bound implementation handle.
    ///
    /// # Panics
    ///
    /// Panics on an empty handle, for the same reason as
    /// [`Self::for_capability`].
    pub fn for_implementation(&self, handle: &ImplHandle) -> Option<&KindVariant> {
        assert!(
            !handle.0.is_empty(),
            "implementation handle passed to for_implementation must not be empty"
        );
        self.by_implementation.get(handle).map(|&i| &self.variants[i])
    }

    /// Resolve a variant by its exact declared name.
    pub fn get(&self, name: &KindName) -> Option<&KindVariant> {
        self.by_name.get(name).map(|&i| &self.variants[i])
    }

    /// Exact-name lookup over a borrowed string; used by text resolution.
    pub(crate) fn get_by_str(&self, name: &str) -> Option<&KindVariant> {
        self.by_name.get(name).map(|&i| &self.variants[i])
    }

    /// Iterates variants in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = &KindVariant> {
        self.variants.iter()
    }

    /// Number of declared variants, available or not.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when the declaration list was empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
