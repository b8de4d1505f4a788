//! Generation orchestrator.
//!
//! This module coordinates the overall generation process, from a validated
//! configuration through topology generation and structural checks to the
//! exported artifacts in the output directory.

use crate::config::Config;
use crate::render::{svg, CytoscapeDocument, Layout};
use crate::tapi::CommonContext;
use crate::topology::generate_topology;
use crate::utils::validation::validate_topology;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact kinds that can be written for a generated topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportFormat {
    /// TAPI common context as JSON
    Json,
    /// Cytoscape elements document
    Cytoscape,
    /// SVG diagram
    Svg,
}

impl ExportFormat {
    /// File name of the artifact for network `name`
    pub fn file_name(&self, name: &str) -> String {
        match self {
            ExportFormat::Json => format!("{}.json", name),
            ExportFormat::Cytoscape => format!("{}-cytoscape.json", name),
            ExportFormat::Svg => format!("{}.svg", name),
        }
    }
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub nodes: usize,
    pub links: usize,
    pub files: Vec<PathBuf>,
}

/// Render one artifact of the generated context
pub fn render(context: &CommonContext, format: ExportFormat) -> Result<String> {
    let topology = context
        .topology()
        .ok_or_else(|| eyre!("Generated context holds no topology"))?;

    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&context.json()?)?,
        ExportFormat::Cytoscape => serde_json::to_string_pretty(&CytoscapeDocument::of(topology).json()?)?,
        ExportFormat::Svg => svg::render(&Layout::of(topology)).wrap_err("Failed to render SVG diagram")?,
    };
    Ok(content)
}

/// Generate the configured topology and write the requested artifacts.
///
/// # Arguments
/// * `config` - Validated configuration
/// * `output_dir` - Directory receiving the artifacts; created if missing
/// * `formats` - Artifacts to write, duplicates are written once
///
/// # Returns
/// Node and link counts plus the written file paths.
pub fn generate_artifacts(config: &Config, output_dir: &Path, formats: &[ExportFormat]) -> Result<ExportSummary> {
    let context = generate_topology(config)
        .wrap_err_with(|| format!("Failed to generate topology '{}'", config.network.name))?;
    let topology = context
        .topology()
        .ok_or_else(|| eyre!("Generated context holds no topology"))?;

    validate_topology(topology).map_err(|e| eyre!("Generated topology is inconsistent: {}", e))?;

    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let mut files = Vec::new();
    for format in formats {
        let path = output_dir.join(format.file_name(&config.network.name));
        if files.contains(&path) {
            continue;
        }
        let content = render(&context, *format)?;
        fs::write(&path, content).wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
        info!("Wrote {:?}", path);
        files.push(path);
    }

    let summary = ExportSummary {
        nodes: topology.nodes().len(),
        links: topology.links().len(),
        files,
    };
    info!(
        "Topology '{}': {} nodes, {} links, {} file(s) written",
        config.network.name,
        summary.nodes,
        summary.links,
        summary.files.len()
    );
    Ok(summary)
}
