//! Topology generation module.
//!
//! This module contains the recursive generator, the interface wiring
//! rules between network-function tiers, and the generator state types.

pub mod connections;
pub mod generator;
pub mod types;

// Re-export key types and functions for easier access
pub use connections::{link_rules, wire_node, End, LinkRule};
pub use generator::{generate_topology, successors, TopologyGenerator};
pub use types::Parents;
