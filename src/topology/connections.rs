//! Interface wiring between network functions.
//!
//! This file holds the per-tier link rules and applies them to a freshly
//! created node. Link ends are found by walking the parent chain for a tier
//! rather than by counting hops, so the same rules hold with or without an
//! optional level (e.g. the fronthaul gateway) in between.

use crate::tapi::{NodeIndex, Tier, Topology, TopologyError};
use crate::utils::ident::IdGenerator;
use log::debug;

/// Where a link end is looked up, relative to the node being wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// The node being wired
    Current,
    /// Nearest node of the tier, searching from the anchor upwards
    /// (the anchor itself included)
    Ancestor(Tier),
}

/// One link created for every new node of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRule {
    /// Interface prefix, also the provider edge point prefix
    pub name_prefix: &'static str,
    /// Prefix of the consumer edge point
    pub consumer_prefix: &'static str,
    pub provider: End,
    pub consumer: End,
}

impl LinkRule {
    const fn new(name_prefix: &'static str, provider: End, consumer: End) -> Self {
        Self {
            name_prefix,
            consumer_prefix: name_prefix,
            provider,
            consumer,
        }
    }

    /// Management interface terminating on the SMO's O1 NETCONF consumer
    const fn managed_by_smo(name_prefix: &'static str) -> Self {
        Self {
            name_prefix,
            consumer_prefix: O1_NETCONF,
            provider: End::Current,
            consumer: End::Ancestor(Tier::Smo),
        }
    }
}

/// Interface prefix of the intra-CU link, provided by the user plane
pub const E1: &str = "e1-unknown";

const O1_NETCONF: &str = "o1-netconf";

use End::{Ancestor, Current};

const O_CLOUD: &[LinkRule] = &[LinkRule::new("o2-rest", Current, Ancestor(Tier::Smo))];

const NEAR_RT_RIC: &[LinkRule] = &[
    LinkRule::new("a1-rest", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-netconf", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-file", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-ves", Ancestor(Tier::Smo), Current),
];

const O_CU: &[LinkRule] = &[
    LinkRule::new("e2-rest", Current, Ancestor(Tier::NearRtRic)),
    LinkRule::new("o1-netconf", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-file", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-ves", Ancestor(Tier::Smo), Current),
];

// applied once per CU plane; the plane not providing an F1 flavour skips it
const O_DU: &[LinkRule] = &[
    LinkRule::new("e2-rest", Current, Ancestor(Tier::NearRtRic)),
    LinkRule::new("o1-netconf", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-file", Current, Ancestor(Tier::Smo)),
    LinkRule::new("o1-ves", Ancestor(Tier::Smo), Current),
    LinkRule::new("f1-c-unknown", Ancestor(Tier::OCuCp), Current),
    LinkRule::new("f1-u-unknown", Ancestor(Tier::OCuUp), Current),
];

const FRONTHAUL_GATEWAY: &[LinkRule] = &[LinkRule::managed_by_smo("oam-netconf")];

const O_RU: &[LinkRule] = &[LinkRule::managed_by_smo("open-fronthaul-m-plane-netconf")];

const USER_EQUIPMENT: &[LinkRule] = &[LinkRule::new("uu-unknown", Ancestor(Tier::ORu), Current)];

/// Links created for every new node of `tier`, in creation order
pub fn link_rules(tier: Tier) -> &'static [LinkRule] {
    match tier {
        Tier::Smo => &[],
        Tier::OCloud => O_CLOUD,
        Tier::NearRtRic => NEAR_RT_RIC,
        Tier::OCuCp | Tier::OCuUp => O_CU,
        Tier::ODu => O_DU,
        Tier::FronthaulGateway => FRONTHAUL_GATEWAY,
        Tier::ORu => O_RU,
        Tier::UserEquipment => USER_EQUIPMENT,
    }
}

/// Parent hops from a node of `tier` to its SMO in a complete chain.
///
/// The O-RU sits one hop further down when a fronthaul gateway is present.
pub fn smo_distance(tier: Tier, via_gateway: bool) -> Option<usize> {
    match tier {
        Tier::Smo | Tier::UserEquipment => None,
        Tier::OCloud | Tier::NearRtRic => Some(1),
        Tier::OCuCp | Tier::OCuUp => Some(2),
        Tier::ODu => Some(3),
        Tier::FronthaulGateway => Some(4),
        Tier::ORu if via_gateway => Some(5),
        Tier::ORu => Some(4),
    }
}

fn resolve(topology: &Topology, end: End, current: NodeIndex, anchor: NodeIndex) -> Option<NodeIndex> {
    match end {
        End::Current => Some(current),
        End::Ancestor(tier) => topology.nearest_of_tier(anchor, tier),
    }
}

/// Create the links of a freshly added node.
///
/// # Arguments
/// * `topology` - Topology owning `current` and its ancestors
/// * `ids` - Identifier source
/// * `current` - The node being wired
/// * `anchors` - Parent nodes to resolve ancestors from; rules run once per anchor
///
/// # Returns
/// Number of links created. Rules whose far end does not exist in this
/// generation (the pattern started below it) are skipped.
pub fn wire_node(
    topology: &mut Topology,
    ids: &mut IdGenerator,
    current: NodeIndex,
    anchors: &[NodeIndex],
) -> Result<usize, TopologyError> {
    let tier = topology.node(current).tier();
    let mut created = 0;

    for anchor in anchors {
        for rule in link_rules(tier) {
            let provider = resolve(topology, rule.provider, current, *anchor);
            let consumer = resolve(topology, rule.consumer, current, *anchor);
            match (provider, consumer) {
                (Some(provider), Some(consumer)) => {
                    topology.connect(ids, rule.name_prefix, rule.consumer_prefix, provider, consumer)?;
                    created += 1;
                }
                _ => debug!(
                    "Skipping {} for {}: no peer above {}",
                    rule.name_prefix,
                    topology.node(current).name(),
                    topology.node(*anchor).name()
                ),
            }
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tapi::{Node, NodeOptions};

    fn add(topology: &mut Topology, ids: &mut IdGenerator, tier: Tier, local_id: &str, parent: Option<NodeIndex>) -> NodeIndex {
        let node = Node::new(ids, tier, local_id.to_string(), parent, NodeOptions::default()).unwrap();
        topology.add_node(node)
    }

    fn link_names(topology: &Topology) -> Vec<&str> {
        topology.links().iter().map(|link| link.name()).collect()
    }

    #[test]
    fn test_ric_links_to_smo() {
        let mut ids = IdGenerator::seeded(41);
        let mut topology = Topology::new(&mut ids, "ric");
        let smo = add(&mut topology, &mut ids, Tier::Smo, "0", None);
        let ric = add(&mut topology, &mut ids, Tier::NearRtRic, "00", Some(smo));

        let created = wire_node(&mut topology, &mut ids, ric, &[smo]).unwrap();
        assert_eq!(created, 4);
        assert_eq!(
            link_names(&topology),
            vec![
                "A1-REST|smo-0|->|near-rt-ric-00|",
                "O1-NETCONF|smo-0|->|near-rt-ric-00|",
                "O1-FILE|smo-0|->|near-rt-ric-00|",
                "O1-VES|near-rt-ric-00|->|smo-0|",
            ]
        );
    }

    #[test]
    fn test_du_wired_once_per_plane() {
        let mut ids = IdGenerator::seeded(42);
        let mut topology = Topology::new(&mut ids, "du");
        let smo = add(&mut topology, &mut ids, Tier::Smo, "0", None);
        let ric = add(&mut topology, &mut ids, Tier::NearRtRic, "00", Some(smo));
        let cp = add(&mut topology, &mut ids, Tier::OCuCp, "000", Some(ric));
        let up = add(&mut topology, &mut ids, Tier::OCuUp, "000", Some(ric));
        let du = add(&mut topology, &mut ids, Tier::ODu, "0000", Some(cp));

        let created = wire_node(&mut topology, &mut ids, du, &[cp, up]).unwrap();
        assert_eq!(created, 10);
        let names = link_names(&topology);
        assert!(names.contains(&"F1-C-UNKNOWN|o-du-0000|->|o-cu-cp-000|"));
        assert!(names.contains(&"F1-U-UNKNOWN|o-du-0000|->|o-cu-up-000|"));
        assert_eq!(names.iter().filter(|n| n.starts_with("E2-REST")).count(), 2);
    }

    #[test]
    fn test_missing_ancestor_is_skipped() {
        let mut ids = IdGenerator::seeded(43);
        let mut topology = Topology::new(&mut ids, "partial");
        let ric = add(&mut topology, &mut ids, Tier::NearRtRic, "0", None);
        let cp = add(&mut topology, &mut ids, Tier::OCuCp, "00", Some(ric));

        let created = wire_node(&mut topology, &mut ids, cp, &[ric]).unwrap();
        assert_eq!(created, 1);
        assert_eq!(link_names(&topology), vec!["E2-REST|near-rt-ric-0|->|o-cu-cp-00|"]);
    }

    #[test]
    fn test_root_node_has_no_links() {
        let mut ids = IdGenerator::seeded(44);
        let mut topology = Topology::new(&mut ids, "root");
        let ru = add(&mut topology, &mut ids, Tier::ORu, "0", None);

        assert_eq!(wire_node(&mut topology, &mut ids, ru, &[]).unwrap(), 0);
        assert!(topology.links().is_empty());
    }

    #[test]
    fn test_every_rule_resolves_against_edge_point_tables() {
        let mut ids = IdGenerator::seeded(45);
        let options = NodeOptions {
            with_o_cloud: true,
            connection_points: false,
        };
        for tier in Tier::ALL {
            let node = Node::new(&mut ids, tier, "0".to_string(), None, options).unwrap();
            for rule in link_rules(tier) {
                if rule.provider == End::Current {
                    assert!(node.edge_point_by_name(&format!("{}-provider", rule.name_prefix)).is_some());
                }
                if rule.consumer == End::Current {
                    assert!(node.edge_point_by_name(&format!("{}-consumer", rule.consumer_prefix)).is_some());
                }
            }
        }
    }

    #[test]
    fn test_smo_distance_table() {
        assert_eq!(smo_distance(Tier::NearRtRic, false), Some(1));
        assert_eq!(smo_distance(Tier::OCuUp, false), Some(2));
        assert_eq!(smo_distance(Tier::ODu, false), Some(3));
        assert_eq!(smo_distance(Tier::FronthaulGateway, true), Some(4));
        assert_eq!(smo_distance(Tier::ORu, true), Some(5));
        assert_eq!(smo_distance(Tier::Smo, false), None);
    }
}
