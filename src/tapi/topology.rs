//! TAPI topology: owner of all generated nodes and links.

use super::link::{Link, LinkConfig};
use super::node::Node;
use super::types::{NameValue, NodeIndex, Tier};
use super::TopologyError;
use crate::utils::ident::IdGenerator;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Ordered node and link collections of one generated network.
///
/// Nodes live in an arena; parent back-references are arena indices, so a
/// node can only ever point at a node of the same topology.
#[derive(Debug, Clone, Serialize)]
pub struct Topology {
    uuid: Uuid,
    name: Vec<NameValue>,
    node: Vec<Node>,
    link: Vec<Link>,
    #[serde(skip)]
    members: HashMap<Uuid, NodeIndex>,
}

impl Topology {
    pub fn new(ids: &mut IdGenerator, name: &str) -> Self {
        Self {
            uuid: ids.next_id(),
            name: vec![NameValue::new("network-name", name)],
            node: Vec::new(),
            link: Vec::new(),
            members: HashMap::new(),
        }
    }

    pub fn identifier(&self) -> Uuid {
        self.uuid
    }

    /// Network name taken from the configuration
    pub fn name(&self) -> &str {
        &self.name[0].value
    }

    pub fn nodes(&self) -> &[Node] {
        &self.node
    }

    pub fn links(&self) -> &[Link] {
        &self.link
    }

    /// Node at `index`.
    ///
    /// # Panics
    /// Panics if `index` was not handed out by this topology.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.node[index.0]
    }

    pub fn node_by_id(&self, id: Uuid) -> Option<&Node> {
        self.members.get(&id).map(|index| self.node(*index))
    }

    pub fn contains_node(&self, id: Uuid) -> bool {
        self.members.contains_key(&id)
    }

    /// Take ownership of `node` and return its arena index
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(parent) = node.parent() {
            assert!(parent.0 < self.node.len(), "parent of {} is not part of the topology", node.name());
        }
        let index = NodeIndex(self.node.len());
        self.members.insert(node.identifier(), index);
        self.node.push(node);
        index
    }

    /// Append a link. Both of its nodes must already belong to this topology.
    pub fn add_link(&mut self, link: Link) -> &Link {
        for end in link.ends() {
            assert!(
                self.contains_node(end.node_uuid),
                "link {} references node {} outside topology {}",
                link.name(),
                end.node_uuid,
                self.name()
            );
            assert_eq!(end.topology_uuid, self.uuid, "link {} belongs to another topology", link.name());
        }
        self.link.push(link);
        &self.link[self.link.len() - 1]
    }

    /// Build and append the link for interface `name_prefix` between two
    /// member nodes.
    pub fn connect(
        &mut self,
        ids: &mut IdGenerator,
        name_prefix: &str,
        consumer_prefix: &str,
        provider: NodeIndex,
        consumer: NodeIndex,
    ) -> Result<&Link, TopologyError> {
        let config = LinkConfig::new(self.uuid, name_prefix, self.node(provider), self.node(consumer))
            .with_consumer_prefix(consumer_prefix);
        let link = Link::new(ids, &config)?;
        log::debug!("Wired {}", link.name());
        Ok(self.add_link(link))
    }

    /// Walk the parent chain of `index`, nearest ancestor first
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            topology: self,
            next: self.node(index).parent(),
        }
    }

    /// Nearest strict ancestor of `index` with the given tier
    pub fn nearest_ancestor(&self, index: NodeIndex, tier: Tier) -> Option<NodeIndex> {
        self.ancestors(index).find(|ancestor| self.node(*ancestor).tier() == tier)
    }

    /// `index` itself if it has the given tier, else its nearest ancestor of that tier
    pub fn nearest_of_tier(&self, index: NodeIndex, tier: Tier) -> Option<NodeIndex> {
        if self.node(index).tier() == tier {
            Some(index)
        } else {
            self.nearest_ancestor(index, tier)
        }
    }

    /// Number of parent hops from `index` to its nearest ancestor of `tier`
    pub fn ancestor_distance(&self, index: NodeIndex, tier: Tier) -> Option<usize> {
        self.ancestors(index)
            .position(|ancestor| self.node(ancestor).tier() == tier)
            .map(|position| position + 1)
    }

    /// Number of nodes of one tier
    pub fn count_tier(&self, tier: Tier) -> usize {
        self.node.iter().filter(|node| node.tier() == tier).count()
    }

    /// JSON projection with nodes and links expanded in construction order
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Iterator over the parent chain of a node
pub struct Ancestors<'a> {
    topology: &'a Topology,
    next: Option<NodeIndex>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.topology.node(current).parent();
        Some(current)
    }
}
