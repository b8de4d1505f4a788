//! TAPI links between two node edge points.

use super::node::Node;
use super::types::{
    AdministrativeState, CostCharacteristic, LatencyCharacteristic, LifecycleState, NameValue,
    OperationalState, RiskCharacteristic, TerminationDirection, ValidationMechanism,
};
use super::TopologyError;
use crate::utils::ident::{link_name, IdGenerator};
use serde::Serialize;
use uuid::Uuid;

/// One end of a link: topology, node and edge point identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinkEnd {
    pub topology_uuid: Uuid,
    pub node_uuid: Uuid,
    pub node_edge_point_uuid: Uuid,
}

/// Input for building a link.
///
/// The consumer end is resolved by `{consumer_prefix}-consumer` on the
/// consumer node, the provider end by `{name_prefix}-provider` on the
/// provider node. Both prefixes are equal except for management interfaces
/// that terminate on the SMO's O1 NETCONF consumer.
#[derive(Debug, Clone, Copy)]
pub struct LinkConfig<'a> {
    pub topology_reference: Uuid,
    pub name_prefix: &'a str,
    pub consumer_prefix: &'a str,
    pub provider: &'a Node,
    pub consumer: &'a Node,
}

impl<'a> LinkConfig<'a> {
    pub fn new(topology_reference: Uuid, name_prefix: &'a str, provider: &'a Node, consumer: &'a Node) -> Self {
        Self {
            topology_reference,
            name_prefix,
            consumer_prefix: name_prefix,
            provider,
            consumer,
        }
    }

    /// Resolve the consumer side through a different interface prefix
    pub fn with_consumer_prefix(mut self, consumer_prefix: &'a str) -> Self {
        self.consumer_prefix = consumer_prefix;
        self
    }

    /// Link name: `{PREFIX}|{consumer}|->|{provider}|`
    pub fn name(&self) -> String {
        link_name(self.name_prefix, self.consumer.name(), self.provider.name())
    }

    /// Resolve both ends, consumer first.
    ///
    /// Fails with [`TopologyError::EdgePointNotFound`] when either node lacks
    /// the required edge point.
    pub fn resolve(&self) -> Result<(LinkEnd, LinkEnd), TopologyError> {
        let consumer_nep = self
            .consumer
            .require_edge_point(&format!("{}-consumer", self.consumer_prefix.to_lowercase()))?;
        let provider_nep = self
            .provider
            .require_edge_point(&format!("{}-provider", self.name_prefix.to_lowercase()))?;

        Ok((
            LinkEnd {
                topology_uuid: self.topology_reference,
                node_uuid: self.consumer.identifier(),
                node_edge_point_uuid: consumer_nep.identifier(),
            },
            LinkEnd {
                topology_uuid: self.topology_reference,
                node_uuid: self.provider.identifier(),
                node_edge_point_uuid: provider_nep.identifier(),
            },
        ))
    }
}

/// A logical connection for one interface between a consumer and a provider
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Link {
    uuid: Uuid,
    name: Vec<NameValue>,
    transitioned_layer_protocol_name: Vec<String>,
    administrative_state: AdministrativeState,
    operational_state: OperationalState,
    direction: TerminationDirection,
    lifecycle_state: LifecycleState,
    node_edge_point: [LinkEnd; 2],
    latency_characteristic: Vec<LatencyCharacteristic>,
    layer_protocol_name: Vec<String>,
    risk_characteristic: Vec<RiskCharacteristic>,
    validation_mechanism: Vec<ValidationMechanism>,
    cost_characteristic: Vec<CostCharacteristic>,
}

impl Link {
    /// Build a link from a resolved configuration
    pub fn new(ids: &mut IdGenerator, config: &LinkConfig<'_>) -> Result<Self, TopologyError> {
        let (consumer_end, provider_end) = config.resolve()?;

        Ok(Self {
            uuid: ids.next_id(),
            name: vec![NameValue::new("topology-link-name", config.name())],
            transitioned_layer_protocol_name: vec!["inETH".to_string(), "outETH".to_string()],
            administrative_state: AdministrativeState::Locked,
            operational_state: OperationalState::Enabled,
            direction: TerminationDirection::Bidirectional,
            lifecycle_state: LifecycleState::Installed,
            node_edge_point: [consumer_end, provider_end],
            latency_characteristic: vec![LatencyCharacteristic::default()],
            layer_protocol_name: vec!["ETH".to_string()],
            risk_characteristic: vec![RiskCharacteristic::default()],
            validation_mechanism: vec![ValidationMechanism::default()],
            cost_characteristic: vec![CostCharacteristic::default()],
        })
    }

    pub fn identifier(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name[0].value
    }

    pub fn consumer_end(&self) -> &LinkEnd {
        &self.node_edge_point[0]
    }

    pub fn provider_end(&self) -> &LinkEnd {
        &self.node_edge_point[1]
    }

    pub fn ends(&self) -> &[LinkEnd; 2] {
        &self.node_edge_point
    }

    /// JSON projection of this link
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
