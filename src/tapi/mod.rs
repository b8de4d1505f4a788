//! TAPI information model.
//!
//! This module contains the entities the generator builds: topology, nodes
//! with their edge points and connection points, links, and the context
//! objects wrapping them for export.

pub mod context;
pub mod edge_point;
pub mod link;
pub mod node;
pub mod topology;
pub mod types;

pub use context::{CommonContext, TopologyContext};
pub use edge_point::{ConnectionPoint, EdgePoint, InterfaceSpec};
pub use link::{Link, LinkConfig, LinkEnd};
pub use node::{Node, NodeOptions};
pub use topology::Topology;
pub use types::{NodeIndex, Protocol, Role, TerminationDirection, Tier};

/// Errors raised while building the TAPI model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopologyError {
    #[error("Unknown network function type '{0}'")]
    UnknownTier(String),
    #[error("Pattern has no level to start generation from")]
    EmptyPattern,
    #[error("Node '{node}' has no edge point '{edge_point}'")]
    EdgePointNotFound { node: String, edge_point: String },
    #[error("Node '{node}' already owns an edge point '{edge_point}'")]
    DuplicateEdgePoint { node: String, edge_point: String },
}
