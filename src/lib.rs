//! # Topogen - O-RAN topology generator
//!
//! This library generates O-RAN network topologies expressed in the ONF
//! Transport API (TAPI) information model.
//!
//! ## Overview
//!
//! A configuration names a network and a pattern of instance counts per
//! network-function level. Starting at the entry level, the generator
//! creates that many instances below every parent, attaches the fixed set of
//! interface edge points each function exposes, and links every new node to
//! the ancestors it talks to (A1, E1, E2, F1, O1, O2, Open Fronthaul M-plane
//! and Uu).
//!
//! ## Architecture
//!
//! - `config`: Typed configuration and structural validation
//! - `config_loader`: YAML/JSON configuration file loading
//! - `tapi`: TAPI entities (context, topology, node, edge point, link)
//! - `topology`: The recursive generator and the interface wiring rules
//! - `render`: Layout, Cytoscape and SVG projections
//! - `utils`: Identifiers, naming helpers and topology validation
//! - `orchestrator`: Generation plus artifact export
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use topogen::{config_loader, orchestrator};
//! use topogen::orchestrator::ExportFormat;
//!
//! let config = config_loader::load_config(Path::new("network.yaml"))?;
//! let summary = orchestrator::generate_artifacts(
//!     &config,
//!     Path::new("output"),
//!     &[ExportFormat::Json, ExportFormat::Svg],
//! )?;
//! println!("{} nodes, {} links", summary.nodes, summary.links);
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! general:
//!   seed: 42            # optional, reproducible identifiers
//! network:
//!   name: o-ran-lab
//!   connection-points: false
//!   pattern:            # order matters: the first key is the entry level
//!     smo: 1
//!     near-rt-ric: 2
//!     o-cu: 2
//!     o-du: 2
//!     fronthaul-gateway: 1
//!     o-ru: 2
//!     user-equipment: 3
//! ```
//!
//! ## Error Handling
//!
//! Domain errors are `thiserror` enums (`config::ValidationError`,
//! `tapi::TopologyError`); loading and export return `color_eyre` results
//! with context attached.

pub mod config;
pub mod config_loader;
pub mod orchestrator;
pub mod render;
pub mod tapi;
pub mod topology;
pub mod utils;
