use log::LevelFilter;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Levels of the generation pattern, in their fixed hierarchy order.
///
/// A level is what the configuration talks about. The `o-cu` level expands
/// into two node tiers (control plane and user plane), everything else maps
/// one-to-one onto a node tier.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    /// Service Management and Orchestration
    Smo,
    /// O-Cloud, an independent branch below the SMO
    OCloud,
    /// Near real-time RAN Intelligent Controller
    NearRtRic,
    /// O-RAN Centralized Unit (CP and UP pair)
    OCu,
    /// O-RAN Distributed Unit
    ODu,
    /// Fronthaul gateway between O-DU and O-RU
    FronthaulGateway,
    /// O-RAN Radio Unit
    ORu,
    /// User equipment attached over the air interface
    UserEquipment,
}

impl Level {
    /// All levels in hierarchy order.
    pub const ALL: [Level; 8] = [
        Level::Smo,
        Level::OCloud,
        Level::NearRtRic,
        Level::OCu,
        Level::ODu,
        Level::FronthaulGateway,
        Level::ORu,
        Level::UserEquipment,
    ];

    /// The pattern key naming this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Smo => "smo",
            Level::OCloud => "o-cloud",
            Level::NearRtRic => "near-rt-ric",
            Level::OCu => "o-cu",
            Level::ODu => "o-du",
            Level::FronthaulGateway => "fronthaul-gateway",
            Level::ORu => "o-ru",
            Level::UserEquipment => "user-equipment",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownLevel(s.to_string()))
    }
}

/// Ordered mapping from level name to instance count.
///
/// Key order is kept exactly as written in the configuration file. Keys stay
/// plain strings so that an unknown entry level can be reported by the
/// generator instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Pattern {
    entries: Vec<(String, u32)>,
}

impl Pattern {
    /// Build a pattern from `(key, count)` pairs, keeping their order.
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, u32)>) -> Self {
        let mut pattern = Pattern::default();
        for (key, count) in entries {
            let key = key.into();
            // later duplicates overwrite the count but keep the first position
            match pattern.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = count,
                None => pattern.entries.push((key, count)),
            }
        }
        pattern
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The first key in configuration order.
    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    /// Instance count for a level, if the level is part of the pattern.
    pub fn count(&self, level: Level) -> Option<u32> {
        self.entries
            .iter()
            .find(|(k, _)| k == level.as_str())
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, level: Level) -> bool {
        self.count(level).is_some()
    }

    /// Copy of this pattern with `level` consumed.
    pub fn without(&self, level: Level) -> Pattern {
        Pattern {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| k != level.as_str())
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for Pattern {
    type Error = ValidationError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let count = value
                .as_u64()
                .and_then(|count| u32::try_from(count).ok())
                .ok_or_else(|| {
                    ValidationError::InvalidPattern(format!(
                        "count for '{}' must be a non-negative integer, got {}",
                        key, value
                    ))
                })?;
            entries.push((key, count));
        }
        Ok(Pattern { entries })
    }
}

impl From<Pattern> for Map<String, Value> {
    fn from(pattern: Pattern) -> Self {
        pattern
            .entries
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()
    }
}

/// Top-level generator configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    pub network: NetworkConfig,
}

impl Config {
    /// Validate the configuration shape.
    ///
    /// Unknown pattern keys other than the entry are only warned about; an
    /// unknown entry level is reported by the generator.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.network.name.trim().is_empty() {
            return Err(ValidationError::InvalidNetwork(
                "name cannot be empty".to_string(),
            ));
        }

        if self.network.pattern.is_empty() {
            return Err(ValidationError::InvalidPattern(
                "pattern must contain at least one level".to_string(),
            ));
        }

        if let Some(level) = &self.general.log_level {
            if level.parse::<LevelFilter>().is_err() {
                return Err(ValidationError::InvalidGeneral(format!("unknown log level '{}'", level)));
            }
        }

        if let Some(entry) = self.network.entry {
            if !self.network.pattern.contains(entry) {
                return Err(ValidationError::MissingPatternKey(entry.to_string()));
            }
        }

        let entry_key = self.network.entry_key();
        for (key, _) in self.network.pattern.iter() {
            if Some(key) != entry_key && key.parse::<Level>().is_err() {
                log::warn!("Ignoring unknown pattern level '{}'", key);
            }
        }

        Ok(())
    }
}

/// Settings not related to the network shape
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Seed for reproducible identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GeneralConfig {
    /// Configured log level, if set and recognised
    pub fn log_filter(&self) -> Option<LevelFilter> {
        self.log_level.as_deref().and_then(|level| level.parse().ok())
    }
}

/// The network to generate
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    pub name: String,
    /// Level the generation starts at. Defaults to the first pattern key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Level>,
    /// Attach a connection point below every edge point
    #[serde(default)]
    pub connection_points: bool,
    pub pattern: Pattern,
}

impl NetworkConfig {
    /// The pattern key generation starts at: the explicit entry if set,
    /// otherwise the first key of the pattern.
    pub fn entry_key(&self) -> Option<&str> {
        match self.entry {
            Some(level) => Some(level.as_str()),
            None => self.pattern.first_key(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Unknown network function level '{0}'")]
    UnknownLevel(String),
    #[error("Level '{0}' is not part of the pattern")]
    MissingPatternKey(String),
}
