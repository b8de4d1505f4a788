//! Identifier and naming utilities.
//!
//! Every TAPI entity gets a UUID once, at creation. Names are deterministic
//! and derived from tiers, local ids and interfaces.

use crate::tapi::types::{Protocol, Role, Tier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Source of entity identifiers.
///
/// `Random` draws v4 UUIDs from the OS generator. `Seeded` derives them from
/// a deterministic stream so two runs with the same seed produce identical
/// output.
#[derive(Debug)]
pub enum IdGenerator {
    Random,
    Seeded(StdRng),
}

impl IdGenerator {
    pub fn random() -> Self {
        IdGenerator::Random
    }

    pub fn seeded(seed: u64) -> Self {
        IdGenerator::Seeded(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::random(),
        }
    }

    /// Draw the next identifier
    pub fn next_id(&mut self) -> Uuid {
        match self {
            IdGenerator::Random => Uuid::new_v4(),
            IdGenerator::Seeded(rng) => {
                let bytes: [u8; 16] = rng.gen();
                uuid::Builder::from_random_bytes(bytes).into_uuid()
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::random()
    }
}

/// Local id of the `index`-th child of a node with local id `parent_local_id`.
///
/// # Examples
/// ```
/// use topogen::utils::ident::local_id;
///
/// assert_eq!(local_id(None, 3), "3");
/// assert_eq!(local_id(Some("01"), 2), "012");
/// ```
pub fn local_id(parent_local_id: Option<&str>, index: u32) -> String {
    format!("{}{}", parent_local_id.unwrap_or(""), index)
}

/// Node name, e.g. `near-rt-ric-01`
pub fn node_name(tier: Tier, local_id: &str) -> String {
    format!("{}-{}", tier.type_name(), local_id)
}

/// Canonical edge-point name: lowercase `{interface}-{protocol}-{role}`
pub fn edge_point_name(interface: &str, protocol: Protocol, role: Role) -> String {
    format!("{}-{}-{}", interface, protocol.as_str(), role.as_str()).to_lowercase()
}

/// Link name: `{PREFIX}|{consumer}|->|{provider}|`
pub fn link_name(prefix: &str, consumer: &str, provider: &str) -> String {
    [prefix.to_uppercase().as_str(), consumer, "->", provider, ""].join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ids_repeat() {
        let mut first = IdGenerator::seeded(42);
        let mut second = IdGenerator::seeded(42);
        for _ in 0..5 {
            assert_eq!(first.next_id(), second.next_id());
        }
    }

    #[test]
    fn test_seeded_ids_are_v4() {
        let mut ids = IdGenerator::seeded(1);
        let id = ids.next_id();
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, ids.next_id());
    }

    #[test]
    fn test_random_ids_differ() {
        let mut ids = IdGenerator::random();
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_names() {
        assert_eq!(node_name(Tier::OCuCp, "000"), "o-cu-cp-000");
        assert_eq!(edge_point_name("o1", Protocol::Netconf, Role::Consumer), "o1-netconf-consumer");
        assert_eq!(edge_point_name("f1-c", Protocol::Unknown, Role::Provider), "f1-c-unknown-provider");
        assert_eq!(
            link_name("a1-rest", "smo-0", "near-rt-ric-00"),
            "A1-REST|smo-0|->|near-rt-ric-00|"
        );
    }
}
