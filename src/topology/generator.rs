//! Recursive topology generation.
//!
//! This file walks the configured pattern from the entry level downwards,
//! creating the requested number of instances per parent and wiring each
//! new node towards its ancestors as soon as it exists.

use crate::config::{Config, Level, NetworkConfig, Pattern};
use crate::tapi::{CommonContext, Node, NodeIndex, NodeOptions, Tier, Topology, TopologyContext, TopologyError};
use crate::topology::connections::{wire_node, E1};
use crate::topology::types::Parents;
use crate::utils::ident::{local_id, IdGenerator};
use log::{debug, info};

/// Levels spawned below `level`, restricted to those left in `remaining`.
///
/// The fronthaul gateway is optional: an O-DU spawns it when configured and
/// O-RUs directly otherwise.
pub fn successors(level: Level, remaining: &Pattern) -> Vec<Level> {
    let candidates: &[Level] = match level {
        Level::Smo => &[Level::OCloud, Level::NearRtRic],
        Level::OCloud => &[],
        Level::NearRtRic => &[Level::OCu],
        Level::OCu => &[Level::ODu],
        Level::ODu if remaining.contains(Level::FronthaulGateway) => &[Level::FronthaulGateway],
        Level::ODu => &[Level::ORu],
        Level::FronthaulGateway => &[Level::ORu],
        Level::ORu => &[Level::UserEquipment],
        Level::UserEquipment => &[],
    };
    candidates
        .iter()
        .copied()
        .filter(|candidate| remaining.contains(*candidate))
        .collect()
}

/// Tier of the nodes a level creates; the O-CU level creates two
fn single_tier(level: Level) -> Option<Tier> {
    match level {
        Level::Smo => Some(Tier::Smo),
        Level::OCloud => Some(Tier::OCloud),
        Level::NearRtRic => Some(Tier::NearRtRic),
        Level::OCu => None,
        Level::ODu => Some(Tier::ODu),
        Level::FronthaulGateway => Some(Tier::FronthaulGateway),
        Level::ORu => Some(Tier::ORu),
        Level::UserEquipment => Some(Tier::UserEquipment),
    }
}

/// Builds one topology from a network configuration
pub struct TopologyGenerator<'a> {
    network: &'a NetworkConfig,
    ids: IdGenerator,
    options: NodeOptions,
}

impl<'a> TopologyGenerator<'a> {
    /// Generator drawing identifiers from the configured seed, if any
    pub fn new(config: &'a Config) -> Self {
        Self::with_ids(config, IdGenerator::from_seed(config.general.seed))
    }

    pub fn with_ids(config: &'a Config, ids: IdGenerator) -> Self {
        let options = NodeOptions {
            with_o_cloud: config.network.pattern.contains(Level::OCloud),
            connection_points: config.network.connection_points,
        };
        Self {
            network: &config.network,
            ids,
            options,
        }
    }

    /// Generate the topology and wrap it into a common context.
    ///
    /// # Returns
    /// The context, or an error when the entry level is not a known level.
    /// Nothing is returned on error, not even a partial topology.
    pub fn generate(mut self) -> Result<CommonContext, TopologyError> {
        let entry_key = self.network.entry_key().ok_or(TopologyError::EmptyPattern)?;
        let entry: Level = entry_key
            .parse()
            .map_err(|_| TopologyError::UnknownTier(entry_key.to_string()))?;
        let count = self
            .network
            .pattern
            .count(entry)
            .ok_or_else(|| TopologyError::UnknownTier(entry_key.to_string()))?;

        info!("Generating topology '{}' starting at level '{}'", self.network.name, entry);

        let network = self.network;
        let mut topology = Topology::new(&mut self.ids, &network.name);
        self.create_level(&mut topology, entry, Parents::Root, &network.pattern, count)?;

        info!(
            "Generated {} nodes and {} links",
            topology.nodes().len(),
            topology.links().len()
        );
        for tier in Tier::ALL {
            let nodes = topology.count_tier(tier);
            if nodes > 0 {
                debug!("  {}: {}", tier.label(), nodes);
            }
        }

        let mut topology_context = TopologyContext::new();
        topology_context.add(topology);
        Ok(CommonContext::new(&mut self.ids, topology_context))
    }

    fn create_level(
        &mut self,
        topology: &mut Topology,
        level: Level,
        parents: Parents,
        pattern: &Pattern,
        count: u32,
    ) -> Result<(), TopologyError> {
        let remaining = pattern.without(level);
        debug!(
            "Creating {} x {} below {}",
            count,
            level,
            parents.primary().map_or("root", |p| topology.node(p).name())
        );

        for index in 0..count {
            let id = local_id(parents.primary().map(|p| topology.node(p).local_id()), index);
            let children = match single_tier(level) {
                Some(tier) => Parents::Node(self.add_wired(topology, tier, id, parents)?),
                None => self.create_o_cu(topology, id, parents)?,
            };
            self.descend(topology, level, children, &remaining)?;
        }
        Ok(())
    }

    /// Control plane, user plane and the E1 link between them
    fn create_o_cu(
        &mut self,
        topology: &mut Topology,
        local_id: String,
        parents: Parents,
    ) -> Result<Parents, TopologyError> {
        let cp = self.add_wired(topology, Tier::OCuCp, local_id.clone(), parents)?;
        let up = self.add_wired(topology, Tier::OCuUp, local_id, parents)?;
        topology.connect(&mut self.ids, E1, E1, up, cp)?;
        Ok(Parents::CuPair { cp, up })
    }

    fn add_wired(
        &mut self,
        topology: &mut Topology,
        tier: Tier,
        local_id: String,
        parents: Parents,
    ) -> Result<NodeIndex, TopologyError> {
        let node = Node::new(&mut self.ids, tier, local_id, parents.primary(), self.options)?;
        let current = topology.add_node(node);
        wire_node(topology, &mut self.ids, current, &parents.anchors())?;
        Ok(current)
    }

    fn descend(
        &mut self,
        topology: &mut Topology,
        level: Level,
        parents: Parents,
        remaining: &Pattern,
    ) -> Result<(), TopologyError> {
        for child in successors(level, remaining) {
            if let Some(count) = remaining.count(child) {
                self.create_level(topology, child, parents, remaining, count)?;
            }
        }
        Ok(())
    }
}

/// Generate the configured topology with identifiers per `general.seed`
pub fn generate_topology(config: &Config) -> Result<CommonContext, TopologyError> {
    TopologyGenerator::new(config).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> Config {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_successors_follow_pattern() {
        let full = Pattern::from_entries([
            ("o-du", 1),
            ("fronthaul-gateway", 1),
            ("o-ru", 1),
            ("user-equipment", 1),
        ]);
        assert_eq!(successors(Level::ODu, &full), vec![Level::FronthaulGateway]);
        assert_eq!(successors(Level::ODu, &full.without(Level::FronthaulGateway)), vec![Level::ORu]);
        assert_eq!(successors(Level::ORu, &full), vec![Level::UserEquipment]);
        assert!(successors(Level::UserEquipment, &full).is_empty());

        let smo = Pattern::from_entries([("o-cloud", 1), ("near-rt-ric", 1)]);
        assert_eq!(successors(Level::Smo, &smo), vec![Level::OCloud, Level::NearRtRic]);
        assert!(successors(Level::NearRtRic, &smo).is_empty());
    }

    #[test]
    fn test_single_smo() {
        let config = config(
            r#"
general:
  seed: 1
network:
  name: single
  pattern:
    smo: 1
"#,
        );
        let context = generate_topology(&config).unwrap();
        let topology = context.topology().unwrap();

        assert_eq!(topology.nodes().len(), 1);
        assert!(topology.links().is_empty());
        assert_eq!(topology.nodes()[0].name(), "smo-0");
        assert_eq!(topology.nodes()[0].edge_points().len(), 4);
    }

    #[test]
    fn test_o_cu_pair_shares_local_id() {
        let config = config(
            r#"
general:
  seed: 2
network:
  name: cu
  pattern:
    smo: 1
    near-rt-ric: 1
    o-cu: 2
    o-du: 1
"#,
        );
        let context = generate_topology(&config).unwrap();
        let topology = context.topology().unwrap();
        let names: Vec<&str> = topology.nodes().iter().map(|n| n.name()).collect();

        assert!(names.contains(&"o-cu-cp-001"));
        assert!(names.contains(&"o-cu-up-001"));
        assert!(names.contains(&"o-du-0010"));
        assert!(topology
            .links()
            .iter()
            .any(|l| l.name() == "E1-UNKNOWN|o-cu-cp-001|->|o-cu-up-001|"));
    }

    #[test]
    fn test_unknown_entry_is_error() {
        let config = config(
            r#"
network:
  name: bogus
  pattern:
    bogus: 1
    smo: 1
"#,
        );
        assert_eq!(
            generate_topology(&config).unwrap_err(),
            TopologyError::UnknownTier("bogus".to_string())
        );
    }

    #[test]
    fn test_explicit_entry_overrides_order() {
        let config = config(
            r#"
general:
  seed: 3
network:
  name: explicit
  entry: smo
  pattern:
    near-rt-ric: 2
    smo: 1
"#,
        );
        let context = generate_topology(&config).unwrap();
        let topology = context.topology().unwrap();

        assert_eq!(topology.nodes()[0].tier(), Tier::Smo);
        assert_eq!(topology.nodes().len(), 3);
        assert_eq!(topology.links().len(), 8);
    }

    #[test]
    fn test_ric_entry_has_no_links() {
        let config = config(
            r#"
network:
  name: rics
  pattern:
    near-rt-ric: 2
"#,
        );
        let context = generate_topology(&config).unwrap();
        let topology = context.topology().unwrap();

        assert_eq!(topology.nodes().len(), 2);
        assert!(topology.links().is_empty());
    }
}
