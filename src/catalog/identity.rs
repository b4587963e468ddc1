use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable, uppercase identifier for a declared kind (e.g., `CAVE_SPIDER`).
///
/// The name is the catalog's primary key: variant equality and hashing go
/// through it and nothing else.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindName(pub String);

/// Opaque host-assigned identifier confirming a kind exists on the current
/// host version.
///
/// Keys come out of a host capability probe and are meaningless to this crate
/// beyond identity; the host decides their shape.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityKey(pub String);

/// Name of the concrete behavior implementation bound to a kind.
///
/// The registry treats handles as opaque labels; dispatch to the behavior
/// they name happens in the surrounding library.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplHandle(pub String);

impl KindName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CapabilityKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ImplHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets BTreeMap<KindName, _> answer &str probes during text resolution.
impl Borrow<str> for KindName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KindName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ImplHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let name = KindName("CAVE_SPIDER".to_string());
        let serialized = serde_json::to_string(&name).unwrap();
        assert_eq!(serialized, "\"CAVE_SPIDER\"");
        let parsed: KindName = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, name);

        let key = CapabilityKey("cap_cave_spider".to_string());
        let serialized_key = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized_key, "\"cap_cave_spider\"");
        let parsed_key: CapabilityKey = serde_json::from_str(&serialized_key).unwrap();
        assert_eq!(parsed_key, key);

        let handle = ImplHandle("NpcCaveSpider".to_string());
        let serialized_handle = serde_json::to_string(&handle).unwrap();
        assert_eq!(serialized_handle, "\"NpcCaveSpider\"");
        let parsed_handle: ImplHandle = serde_json::from_str(&serialized_handle).unwrap();
        assert_eq!(parsed_handle, handle);
    }

    #[test]
    fn kind_name_displays_verbatim() {
        let name = KindName("IRON_GOLEM".to_string());
        assert_eq!(name.to_string(), "IRON_GOLEM");
        assert_eq!(name.as_str(), "IRON_GOLEM");
    }
}
