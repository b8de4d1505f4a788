//! Node edge points and their connection points.

use super::types::{
    AdministrativeState, LifecycleState, NameValue, OperationalState, PortRole, Protocol, Role,
    TerminationDirection,
};
use crate::utils::ident::{edge_point_name, IdGenerator};
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Static description of one interface a node exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceSpec {
    pub interface: &'static str,
    pub protocol: Protocol,
    pub role: Role,
}

impl InterfaceSpec {
    pub const fn new(interface: &'static str, protocol: Protocol, role: Role) -> Self {
        Self {
            interface,
            protocol,
            role,
        }
    }

    /// Canonical name of an edge point built from this spec
    pub fn name(&self) -> String {
        edge_point_name(self.interface, self.protocol, self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationState {
    #[serde(rename = "PERMANENTLY_TERMINATED")]
    PermanentlyTerminated,
    // spelling follows the generated data consumers already parse
    #[serde(rename = "LT_PERMENANTLY_TERMINATED")]
    LtPermanentlyTerminated,
}

/// A typed interface endpoint owned by exactly one node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EdgePoint {
    uuid: Uuid,
    name: Vec<NameValue>,
    administrative_state: AdministrativeState,
    operational_state: OperationalState,
    lifecycle_state: LifecycleState,
    link_port_role: PortRole,
    layer_protocol_name: String,
    supported_cep_layer_protocol_qualifier: Vec<String>,
    link_port_direction: TerminationDirection,
    termination_state: TerminationState,
    termination_direction: TerminationDirection,
    #[serde(
        rename = "cep-list",
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_cep_list"
    )]
    connection_points: Vec<ConnectionPoint>,
    #[serde(skip)]
    spec: InterfaceSpec,
    #[serde(skip)]
    node: Uuid,
}

impl EdgePoint {
    /// Create the edge point for `spec` on the node identified by `node`
    pub fn new(ids: &mut IdGenerator, node: Uuid, spec: InterfaceSpec) -> Self {
        Self {
            uuid: ids.next_id(),
            name: vec![NameValue::new("interface-name", spec.name())],
            administrative_state: AdministrativeState::Locked,
            operational_state: OperationalState::Enabled,
            lifecycle_state: LifecycleState::Installed,
            link_port_role: PortRole::Symmetric,
            layer_protocol_name: "ETH".to_string(),
            supported_cep_layer_protocol_qualifier: vec![
                "tapi-dsr:DIGITAL_SIGNAL_TYPE_GigE".to_string()
            ],
            link_port_direction: TerminationDirection::Bidirectional,
            termination_state: TerminationState::PermanentlyTerminated,
            termination_direction: spec.role.termination_direction(),
            connection_points: Vec::new(),
            spec,
            node,
        }
    }

    pub fn identifier(&self) -> Uuid {
        self.uuid
    }

    /// Canonical name, unique within the owning node
    pub fn name(&self) -> &str {
        &self.name[0].value
    }

    pub fn interface(&self) -> &str {
        self.spec.interface
    }

    pub fn protocol(&self) -> Protocol {
        self.spec.protocol
    }

    pub fn role(&self) -> Role {
        self.spec.role
    }

    pub fn termination_direction(&self) -> TerminationDirection {
        self.termination_direction
    }

    /// Identifier of the owning node
    pub fn node(&self) -> Uuid {
        self.node
    }

    pub fn connection_points(&self) -> &[ConnectionPoint] {
        &self.connection_points
    }

    /// Attach a connection point sharing this edge point's protocol and role
    pub fn add_connection_point(&mut self, ids: &mut IdGenerator) -> &ConnectionPoint {
        let cep = ConnectionPoint::new(ids, self);
        self.connection_points.push(cep);
        &self.connection_points[self.connection_points.len() - 1]
    }

    /// JSON projection of this edge point
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

fn serialize_cep_list<S: Serializer>(ceps: &[ConnectionPoint], serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct CepList<'a> {
        #[serde(rename = "connection-end-point")]
        connection_end_point: &'a [ConnectionPoint],
    }
    CepList {
        connection_end_point: ceps,
    }
    .serialize(serializer)
}

/// Back-reference from a connection point to the edge point hosting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EdgePointRef {
    pub node_uuid: Uuid,
    pub node_edge_point_uuid: Uuid,
}

/// Finer-grained endpoint nested below an edge point
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConnectionPoint {
    uuid: Uuid,
    name: Vec<NameValue>,
    operational_state: OperationalState,
    lifecycle_state: LifecycleState,
    termination_state: TerminationState,
    termination_direction: TerminationDirection,
    layer_protocol_name: String,
    layer_protocol_qualifier: String,
    connection_port_role: PortRole,
    connection_port_direction: TerminationDirection,
    parent_node_edge_point: EdgePointRef,
}

impl ConnectionPoint {
    fn new(ids: &mut IdGenerator, parent: &EdgePoint) -> Self {
        let spec = parent.spec;
        Self {
            uuid: ids.next_id(),
            name: vec![NameValue::new("connection-edge-point-name", spec.name())],
            operational_state: OperationalState::Enabled,
            lifecycle_state: LifecycleState::Installed,
            termination_state: TerminationState::LtPermanentlyTerminated,
            termination_direction: spec.role.termination_direction(),
            layer_protocol_name: "ETH".to_string(),
            layer_protocol_qualifier: spec.protocol.qualifier(),
            connection_port_role: PortRole::Symmetric,
            connection_port_direction: TerminationDirection::Bidirectional,
            parent_node_edge_point: EdgePointRef {
                node_uuid: parent.node,
                node_edge_point_uuid: parent.uuid,
            },
        }
    }

    pub fn identifier(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name[0].value
    }

    pub fn parent(&self) -> &EdgePointRef {
        &self.parent_node_edge_point
    }
}
