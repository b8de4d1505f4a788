//! Visual projections of a generated topology.
//!
//! Layout computes coordinates once; the SVG document is drawn from it,
//! while the Cytoscape document leaves positioning to the viewer.

pub mod cytoscape;
pub mod layout;
pub mod svg;

pub use cytoscape::CytoscapeDocument;
pub use layout::Layout;
