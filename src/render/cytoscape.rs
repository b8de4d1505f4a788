//! Cytoscape elements export.
//!
//! Each node becomes a compound element holding a hidden `base-` child and
//! one child per edge point. Hidden edges tie the edge points to the base so
//! layouts keep them together; links are edges between edge points.

use crate::tapi::Topology;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Nodes,
    Edges,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ElementData {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub group: Group,
    pub data: ElementData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CytoscapeDocument {
    pub elements: Vec<Element>,
}

impl CytoscapeDocument {
    /// Project a topology onto cytoscape elements
    pub fn of(topology: &Topology) -> Self {
        let mut elements = Vec::new();

        for node in topology.nodes() {
            let node_id = node.identifier().to_string();
            let base_id = format!("base-{}", node_id);

            elements.push(Element {
                group: Group::Nodes,
                data: ElementData {
                    id: node_id.clone(),
                    name: node.name().to_string(),
                    function: Some(node.tier().type_name().to_string()),
                    ..ElementData::default()
                },
            });
            elements.push(Element {
                group: Group::Nodes,
                data: ElementData {
                    id: base_id.clone(),
                    name: "base".to_string(),
                    parent: Some(node_id.clone()),
                    function: Some("base".to_string()),
                    hide: Some("true".to_string()),
                    ..ElementData::default()
                },
            });

            for nep in node.edge_points() {
                let nep_id = nep.identifier().to_string();
                elements.push(Element {
                    group: Group::Nodes,
                    data: ElementData {
                        id: nep_id.clone(),
                        name: nep.name().to_string(),
                        parent: Some(node_id.clone()),
                        ..ElementData::default()
                    },
                });
                elements.push(Element {
                    group: Group::Edges,
                    data: ElementData {
                        id: format!("{}-{}", base_id, nep_id),
                        name: format!("base-{}", nep.name()),
                        source: Some(nep_id),
                        target: Some(base_id.clone()),
                        hide: Some("true".to_string()),
                        base: Some(node.name().to_string()),
                        ..ElementData::default()
                    },
                });
            }
        }

        for link in topology.links() {
            elements.push(Element {
                group: Group::Edges,
                data: ElementData {
                    id: link.identifier().to_string(),
                    name: link.name().to_string(),
                    source: Some(link.consumer_end().node_edge_point_uuid.to_string()),
                    target: Some(link.provider_end().node_edge_point_uuid.to_string()),
                    ..ElementData::default()
                },
            });
        }

        Self { elements }
    }

    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
