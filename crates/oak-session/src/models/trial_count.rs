use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const UNLIMITED: &str = "unlimited";

/// Remaining gated-demo invocations.
///
/// The API reports a plain integer for regular accounts and the string
/// `"unlimited"` for admins; both shapes round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrialCount {
    Limited(u32),
    Unlimited,
}

impl TrialCount {
    /// Remaining count, `None` when unlimited
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Limited(n) => Some(*n),
            Self::Unlimited => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Limited(0))
    }

    /// Count left after one more use, never below zero
    pub fn after_one_use(&self) -> Self {
        match self {
            Self::Limited(n) => Self::Limited(n.saturating_sub(1)),
            Self::Unlimited => Self::Unlimited,
        }
    }
}

impl Default for TrialCount {
    fn default() -> Self {
        Self::Limited(0)
    }
}

impl fmt::Display for TrialCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => f.write_str(UNLIMITED),
        }
    }
}

impl Serialize for TrialCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Limited(n) => serializer.serialize_u32(*n),
            Self::Unlimited => serializer.serialize_str(UNLIMITED),
        }
    }
}

impl<'de> Deserialize<'de> for TrialCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            // Counts are never negative; a negative value means "none left".
            Raw::Number(n) => Ok(Self::Limited(u32::try_from(n.max(0)).unwrap_or(u32::MAX))),
            Raw::Text(s) if s.eq_ignore_ascii_case(UNLIMITED) => Ok(Self::Unlimited),
            Raw::Text(s) => s
                .trim()
                .parse::<u32>()
                .map(Self::Limited)
                .map_err(|_| D::Error::custom(format!("invalid trial count '{s}'"))),
        }
    }
}
