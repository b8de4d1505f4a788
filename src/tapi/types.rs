//! TAPI type definitions.
//!
//! Closed enumerations for network-function tiers, interface protocols and
//! roles, plus the small attribute records every TAPI entity carries.

use serde::Serialize;
use std::fmt;

/// Prefix of the O-RAN network function identities
pub const FUNCTION_IDENTITY_PREFIX: &str = "o-ran-common-identity-refs:";

/// Prefix of the connection point protocol qualifiers
pub const PROTOCOL_QUALIFIER_PREFIX: &str = "o-ran-sc-topology-common:";

/// Network-function role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Smo,
    OCloud,
    NearRtRic,
    OCuCp,
    OCuUp,
    ODu,
    FronthaulGateway,
    ORu,
    UserEquipment,
}

impl Tier {
    pub const ALL: [Tier; 9] = [
        Tier::Smo,
        Tier::OCloud,
        Tier::NearRtRic,
        Tier::OCuCp,
        Tier::OCuUp,
        Tier::ODu,
        Tier::FronthaulGateway,
        Tier::ORu,
        Tier::UserEquipment,
    ];

    /// Type name used in node names, e.g. `o-cu-cp` in `o-cu-cp-000`
    pub fn type_name(&self) -> &'static str {
        match self {
            Tier::Smo => "smo",
            Tier::OCloud => "o-cloud",
            Tier::NearRtRic => "near-rt-ric",
            Tier::OCuCp => "o-cu-cp",
            Tier::OCuUp => "o-cu-up",
            Tier::ODu => "o-du",
            Tier::FronthaulGateway => "fronthaul-gateway",
            Tier::ORu => "o-ru",
            Tier::UserEquipment => "user-equipment",
        }
    }

    /// O-RAN function identity, e.g. `o-ran-common-identity-refs:o-du-function`
    pub fn function(&self) -> String {
        format!("{}{}-function", FUNCTION_IDENTITY_PREFIX, self.type_name())
    }

    /// Human readable label for diagrams
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Smo => "SMO",
            Tier::OCloud => "O-Cloud",
            Tier::NearRtRic => "Near-RT-RIC",
            Tier::OCuCp => "O-CU-CP",
            Tier::OCuUp => "O-CU-UP",
            Tier::ODu => "O-DU",
            Tier::FronthaulGateway => "FHGW",
            Tier::ORu => "O-RU",
            Tier::UserEquipment => "UE",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Protocol qualifier of an edge point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Netconf,
    Rest,
    Ves,
    File,
    Unknown,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Netconf => "NETCONF",
            Protocol::Rest => "REST",
            Protocol::Ves => "VES",
            Protocol::File => "FILE",
            Protocol::Unknown => "unknown",
        }
    }

    /// Short label drawn inside edge-point circles
    pub fn short_label(&self) -> &'static str {
        match self {
            Protocol::Netconf => "NC",
            Protocol::Rest => "REST",
            Protocol::Ves => "VES",
            Protocol::File => "FTP",
            Protocol::Unknown => "-",
        }
    }

    /// Layer protocol qualifier used by connection points
    pub fn qualifier(&self) -> String {
        format!("{}{}", PROTOCOL_QUALIFIER_PREFIX, self.as_str().to_lowercase())
    }
}

/// Role of an edge point on its interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Provider,
    Consumer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Provider => "provider",
            Role::Consumer => "consumer",
        }
    }

    pub fn termination_direction(&self) -> TerminationDirection {
        TerminationDirection::from_role(Some(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminationDirection {
    Source,
    Sink,
    Bidirectional,
}

impl TerminationDirection {
    /// provider is a SOURCE, consumer a SINK, anything else BIDIRECTIONAL
    pub fn from_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Provider) => TerminationDirection::Source,
            Some(Role::Consumer) => TerminationDirection::Sink,
            None => TerminationDirection::Bidirectional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdministrativeState {
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalState {
    Enabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Installed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortRole {
    Symmetric,
}

/// One entry of a TAPI name list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NameValue {
    pub value_name: String,
    pub value: String,
}

impl NameValue {
    pub fn new(value_name: &str, value: impl Into<String>) -> Self {
        Self {
            value_name: value_name.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CostCharacteristic {
    pub cost_name: String,
    pub cost_algorithm: String,
    pub cost_value: String,
}

impl Default for CostCharacteristic {
    fn default() -> Self {
        Self {
            cost_name: "cost".to_string(),
            cost_algorithm: "alg1".to_string(),
            cost_value: "value-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LatencyCharacteristic {
    pub traffic_property_name: String,
    // the TAPI model spells it this way
    pub queing_latency_characteristic: String,
    pub fixed_latency_characteristic: String,
    pub jitter_characteristic: String,
    pub wander_characteristic: String,
}

impl Default for LatencyCharacteristic {
    fn default() -> Self {
        Self {
            traffic_property_name: "property-1".to_string(),
            queing_latency_characteristic: "queue-1".to_string(),
            fixed_latency_characteristic: "latency-1".to_string(),
            jitter_characteristic: "jitter-1".to_string(),
            wander_characteristic: "wander-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RiskCharacteristic {
    pub risk_characteristic_name: String,
    pub risk_identifier_list: Vec<String>,
}

impl Default for RiskCharacteristic {
    fn default() -> Self {
        Self {
            risk_characteristic_name: "risk-name".to_string(),
            risk_identifier_list: vec!["risk-1".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ValidationMechanism {
    pub validation_mechanism: String,
    pub validation_robustness: String,
    pub layer_protocol_adjacency_validated: String,
}

impl Default for ValidationMechanism {
    fn default() -> Self {
        Self {
            validation_mechanism: "mechanism-1".to_string(),
            validation_robustness: "very-robust".to_string(),
            layer_protocol_adjacency_validated: "validated".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Geolocation {
    pub longitude: String,
    pub latitude: String,
    pub altitude: String,
}

impl Default for Geolocation {
    fn default() -> Self {
        Self {
            longitude: "0".to_string(),
            latitude: "0".to_string(),
            altitude: "20000".to_string(),
        }
    }
}

/// Position of a node inside its topology's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);
