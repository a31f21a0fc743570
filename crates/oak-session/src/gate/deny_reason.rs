use crate::NOT_AUTHENTICATED_MESSAGE;

use std::fmt;

use serde::Serialize;

/// Why a gate attempt was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum DenyReason {
    NotAuthenticated,
    /// Known locally; the server was not asked
    NoTrialsRemaining,
    /// Server refused (or could not be reached); message passed through verbatim
    Rejected(String),
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => f.write_str(NOT_AUTHENTICATED_MESSAGE),
            Self::NoTrialsRemaining => f.write_str("No trials remaining"),
            Self::Rejected(message) => f.write_str(message),
        }
    }
}
