//! TAPI nodes and the fixed interface set of every network-function tier.

use super::edge_point::{EdgePoint, InterfaceSpec};
use super::types::{
    AdministrativeState, CostCharacteristic, Geolocation, LatencyCharacteristic, LifecycleState,
    NameValue, NodeIndex, OperationalState, Protocol, Role, Tier,
};
use super::TopologyError;
use crate::utils::ident::{node_name, IdGenerator};
use serde::Serialize;
use uuid::Uuid;

use Protocol::{File, Netconf, Rest, Unknown, Ves};
use Role::{Consumer, Provider};

const SMO: &[InterfaceSpec] = &[
    InterfaceSpec::new("a1", Rest, Consumer),
    InterfaceSpec::new("o1", Netconf, Consumer),
    InterfaceSpec::new("o1", Ves, Provider),
    InterfaceSpec::new("o1", File, Consumer),
];

/// Only attached to the SMO when the pattern has an O-Cloud level
const SMO_O2: InterfaceSpec = InterfaceSpec::new("o2", Rest, Consumer);

const O_CLOUD: &[InterfaceSpec] = &[InterfaceSpec::new("o2", Rest, Provider)];

const NEAR_RT_RIC: &[InterfaceSpec] = &[
    InterfaceSpec::new("a1", Rest, Provider),
    InterfaceSpec::new("e2", Rest, Consumer),
    InterfaceSpec::new("o1", Netconf, Provider),
    InterfaceSpec::new("o1", Ves, Consumer),
    InterfaceSpec::new("o1", File, Provider),
];

const O_CU_CP: &[InterfaceSpec] = &[
    InterfaceSpec::new("e2", Rest, Provider),
    InterfaceSpec::new("o1", Netconf, Provider),
    InterfaceSpec::new("o1", Ves, Consumer),
    InterfaceSpec::new("o1", File, Provider),
    InterfaceSpec::new("f1-c", Unknown, Provider),
    InterfaceSpec::new("e1", Unknown, Consumer),
];

// F1 is provided by the CU on both planes
const O_CU_UP: &[InterfaceSpec] = &[
    InterfaceSpec::new("e2", Rest, Provider),
    InterfaceSpec::new("o1", Netconf, Provider),
    InterfaceSpec::new("o1", Ves, Consumer),
    InterfaceSpec::new("o1", File, Provider),
    InterfaceSpec::new("f1-u", Unknown, Provider),
    InterfaceSpec::new("e1", Unknown, Provider),
];

const O_DU: &[InterfaceSpec] = &[
    InterfaceSpec::new("e2", Rest, Provider),
    InterfaceSpec::new("o1", Netconf, Provider),
    InterfaceSpec::new("o1", Ves, Consumer),
    InterfaceSpec::new("o1", File, Provider),
    InterfaceSpec::new("f1-c", Unknown, Consumer),
    InterfaceSpec::new("f1-u", Unknown, Consumer),
];

const FRONTHAUL_GATEWAY: &[InterfaceSpec] = &[
    // northbound management
    InterfaceSpec::new("oam", Netconf, Provider),
    // southbound fronthaul, left unlinked: the O-RU has no eth-ofh consumer
    InterfaceSpec::new("eth-ofh", Unknown, Provider),
];

const O_RU: &[InterfaceSpec] = &[
    InterfaceSpec::new("open-fronthaul-m-plane", Netconf, Provider),
    InterfaceSpec::new("uu", Unknown, Provider),
];

const USER_EQUIPMENT: &[InterfaceSpec] = &[InterfaceSpec::new("uu", Unknown, Consumer)];

/// The fixed interfaces a node of `tier` exposes, in attachment order
pub fn standard_interfaces(tier: Tier, with_o_cloud: bool) -> Vec<InterfaceSpec> {
    let base = match tier {
        Tier::Smo => SMO,
        Tier::OCloud => O_CLOUD,
        Tier::NearRtRic => NEAR_RT_RIC,
        Tier::OCuCp => O_CU_CP,
        Tier::OCuUp => O_CU_UP,
        Tier::ODu => O_DU,
        Tier::FronthaulGateway => FRONTHAUL_GATEWAY,
        Tier::ORu => O_RU,
        Tier::UserEquipment => USER_EQUIPMENT,
    };
    let mut specs = base.to_vec();
    if tier == Tier::Smo && with_o_cloud {
        specs.push(SMO_O2);
    }
    specs
}

/// Per-generation switches influencing node construction
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeOptions {
    /// The pattern contains an O-Cloud level
    pub with_o_cloud: bool,
    /// Attach one connection point to every edge point
    pub connection_points: bool,
}

/// One network-function instance
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Node {
    uuid: Uuid,
    name: Vec<NameValue>,
    owned_node_edge_point: Vec<EdgePoint>,
    administrative_state: AdministrativeState,
    operational_state: OperationalState,
    lifecycle_state: LifecycleState,
    layer_protocol_name: Vec<String>,
    cost_characteristic: Vec<CostCharacteristic>,
    latency_characteristic: Vec<LatencyCharacteristic>,
    #[serde(rename = "o-ran-topology:function")]
    function: String,
    #[serde(rename = "o-ran-topology:geolocation")]
    geolocation: Geolocation,
    #[serde(skip)]
    tier: Tier,
    #[serde(skip)]
    local_id: String,
    #[serde(skip)]
    parent: Option<NodeIndex>,
}

impl Node {
    /// Create a node of `tier` with its fixed edge-point set attached.
    ///
    /// # Arguments
    /// * `ids` - Identifier source shared by the whole generation
    /// * `tier` - Network-function tier
    /// * `local_id` - Parent chain local ids followed by this node's index
    /// * `parent` - The node one tier above, if any
    /// * `options` - Generation switches
    pub fn new(
        ids: &mut IdGenerator,
        tier: Tier,
        local_id: String,
        parent: Option<NodeIndex>,
        options: NodeOptions,
    ) -> Result<Self, TopologyError> {
        let mut node = Self {
            uuid: ids.next_id(),
            name: vec![
                NameValue::new("topology-node-name", node_name(tier, &local_id)),
                NameValue::new("topology-node-local-id", local_id.clone()),
            ],
            owned_node_edge_point: Vec::new(),
            administrative_state: AdministrativeState::Locked,
            operational_state: OperationalState::Enabled,
            lifecycle_state: LifecycleState::Installed,
            layer_protocol_name: vec!["ETH".to_string()],
            cost_characteristic: vec![CostCharacteristic::default()],
            latency_characteristic: vec![LatencyCharacteristic::default()],
            function: tier.function(),
            geolocation: Geolocation::default(),
            tier,
            local_id,
            parent,
        };

        for spec in standard_interfaces(tier, options.with_o_cloud) {
            let mut nep = EdgePoint::new(ids, node.uuid, spec);
            if options.connection_points {
                nep.add_connection_point(ids);
            }
            node.add_edge_point(nep)?;
        }

        Ok(node)
    }

    /// Append an edge point, rejecting duplicate canonical names
    pub fn add_edge_point(&mut self, nep: EdgePoint) -> Result<&EdgePoint, TopologyError> {
        if self.edge_point_by_name(nep.name()).is_some() {
            return Err(TopologyError::DuplicateEdgePoint {
                node: self.name().to_string(),
                edge_point: nep.name().to_string(),
            });
        }
        self.owned_node_edge_point.push(nep);
        Ok(&self.owned_node_edge_point[self.owned_node_edge_point.len() - 1])
    }

    /// First edge point whose canonical name equals `name`
    pub fn edge_point_by_name(&self, name: &str) -> Option<&EdgePoint> {
        self.owned_node_edge_point.iter().find(|nep| nep.name() == name)
    }

    /// Like [`Node::edge_point_by_name`], but a miss is an error
    pub fn require_edge_point(&self, name: &str) -> Result<&EdgePoint, TopologyError> {
        self.edge_point_by_name(name)
            .ok_or_else(|| TopologyError::EdgePointNotFound {
                node: self.name().to_string(),
                edge_point: name.to_string(),
            })
    }

    pub fn identifier(&self) -> Uuid {
        self.uuid
    }

    /// Node name, e.g. `o-du-0000`
    pub fn name(&self) -> &str {
        &self.name[0].value
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn function_label(&self) -> &'static str {
        self.tier.label()
    }

    /// Index of the node that spawned this one
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn edge_points(&self) -> &[EdgePoint] {
        &self.owned_node_edge_point
    }

    /// JSON projection of this node including its edge points
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
