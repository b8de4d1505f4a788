//! Generated topology validation utilities.
//!
//! This module provides the structural checks run on a generated topology
//! before it is exported.

use crate::tapi::{NodeIndex, Tier, Topology};
use crate::topology::connections::smo_distance;
use std::collections::HashSet;

/// Validate that every link end points at a member node and one of its edge points
///
/// # Arguments
/// * `topology` - The generated topology
///
/// # Returns
/// * `Ok(())` if every link resolves
/// * `Err(String)` naming the first dangling link end
pub fn validate_link_endpoints(topology: &Topology) -> Result<(), String> {
    for link in topology.links() {
        for end in link.ends() {
            if end.topology_uuid != topology.identifier() {
                return Err(format!("Link {} refers to topology {}", link.name(), end.topology_uuid));
            }
            let node = topology
                .node_by_id(end.node_uuid)
                .ok_or_else(|| format!("Link {} refers to unknown node {}", link.name(), end.node_uuid))?;
            if !node
                .edge_points()
                .iter()
                .any(|nep| nep.identifier() == end.node_edge_point_uuid)
            {
                return Err(format!(
                    "Link {} refers to edge point {} not owned by {}",
                    link.name(),
                    end.node_edge_point_uuid,
                    node.name()
                ));
            }
        }
    }
    Ok(())
}

/// Validate that edge point names are unique within each node and that
/// every identifier in the topology is unique
pub fn validate_unique_edge_points(topology: &Topology) -> Result<(), String> {
    let mut identifiers = HashSet::new();

    for node in topology.nodes() {
        if !identifiers.insert(node.identifier()) {
            return Err(format!("Duplicate identifier {} on node {}", node.identifier(), node.name()));
        }
        let mut names = HashSet::new();
        for nep in node.edge_points() {
            if !names.insert(nep.name()) {
                return Err(format!("Node {} owns edge point {} twice", node.name(), nep.name()));
            }
            if !identifiers.insert(nep.identifier()) {
                return Err(format!("Duplicate identifier {} on edge point {}", nep.identifier(), nep.name()));
            }
        }
    }

    for link in topology.links() {
        if !identifiers.insert(link.identifier()) {
            return Err(format!("Duplicate identifier {} on link {}", link.identifier(), link.name()));
        }
    }
    Ok(())
}

/// Validate parent-chain depth of every node managed by an SMO
///
/// A node below an SMO must reach it in the fixed number of hops for its
/// tier. Nodes generated without an SMO above them are not checked.
pub fn validate_management_distances(topology: &Topology) -> Result<(), String> {
    for (position, node) in topology.nodes().iter().enumerate() {
        let index = NodeIndex(position);
        let Some(actual) = topology.ancestor_distance(index, Tier::Smo) else {
            continue;
        };
        let via_gateway = topology.nearest_ancestor(index, Tier::FronthaulGateway).is_some();
        if let Some(expected) = smo_distance(node.tier(), via_gateway) {
            if actual != expected {
                return Err(format!(
                    "Node {} is {} hops below its SMO, expected {}",
                    node.name(),
                    actual,
                    expected
                ));
            }
        }
    }
    Ok(())
}

/// Run every structural check on a generated topology
///
/// # Examples
/// ```
/// use topogen::config::Config;
/// use topogen::topology::generate_topology;
/// use topogen::utils::validation::validate_topology;
///
/// let config: Config = serde_yaml::from_str(
///     "network:\n  name: doc\n  pattern:\n    smo: 1\n    near-rt-ric: 1\n",
/// ).unwrap();
/// let context = generate_topology(&config).unwrap();
/// assert!(validate_topology(context.topology().unwrap()).is_ok());
/// ```
pub fn validate_topology(topology: &Topology) -> Result<(), String> {
    validate_unique_edge_points(topology)?;
    validate_link_endpoints(topology)?;
    validate_management_distances(topology)?;
    Ok(())
}
