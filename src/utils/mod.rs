//! Shared utilities: identifiers, naming and topology validation.

pub mod ident;
pub mod validation;

pub use ident::IdGenerator;
pub use validation::{validate_link_endpoints, validate_management_distances, validate_topology, validate_unique_edge_points};
