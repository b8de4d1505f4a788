//! Context wrappers around generated topologies.

use super::topology::Topology;
use super::types::NameValue;
use crate::utils::ident::IdGenerator;
use serde::Serialize;
use uuid::Uuid;

/// Name of every generated common context
pub const CONTEXT_NAME: &str = "Generated Topology";

/// Ordered collection of topologies
#[derive(Debug, Clone, Default, Serialize)]
pub struct TopologyContext {
    topology: Vec<Topology>,
}

impl TopologyContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, topology: Topology) -> &mut Self {
        self.topology.push(topology);
        self
    }

    pub fn topologies(&self) -> &[Topology] {
        &self.topology
    }
}

#[derive(Debug, Clone, Serialize)]
struct ContextBody {
    uuid: Uuid,
    name: Vec<NameValue>,
    #[serde(rename = "tapi-topology:topology-context")]
    topology_context: TopologyContext,
}

/// Exported root object: `{"tapi-common:context": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CommonContext {
    #[serde(rename = "tapi-common:context")]
    context: ContextBody,
}

impl CommonContext {
    pub fn new(ids: &mut IdGenerator, topology_context: TopologyContext) -> Self {
        Self {
            context: ContextBody {
                uuid: ids.next_id(),
                name: vec![NameValue::new("context-name", CONTEXT_NAME)],
                topology_context,
            },
        }
    }

    pub fn identifier(&self) -> Uuid {
        self.context.uuid
    }

    /// The first topology; generation always produces exactly one
    pub fn topology(&self) -> Option<&Topology> {
        self.context.topology_context.topologies().first()
    }

    /// JSON projection of the whole model
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
