use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque tag naming the gated feature a trial is spent on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AgentKind {
    Travel,
    Financial,
    #[default]
    Unknown,
    /// Any other tag, sent verbatim
    Other(String),
}

impl AgentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Travel => "travel",
            Self::Financial => "financial",
            Self::Unknown => "unknown",
            Self::Other(tag) => tag,
        }
    }

    /// Human-readable assistant name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Travel => "Travel Assistant",
            Self::Financial => "Financial Analysis Assistant",
            Self::Unknown => "AI Assistant",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for AgentKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "travel" => Self::Travel,
            "financial" => Self::Financial,
            "" | "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AgentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AgentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let Ok(kind) = s.parse::<AgentKind>();
        Ok(kind)
    }
}
