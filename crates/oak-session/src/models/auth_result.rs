use crate::{ApiOutcome, UserProfile};

use serde::{Deserialize, Serialize};

/// Result of register, login, profile and password operations
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthResult {
    #[serde(default)]
    pub success: bool,
    /// `msg` is what the token middleware uses for expired or missing tokens
    #[serde(default, alias = "msg")]
    pub message: String,
    /// Never serialized back out
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl ApiOutcome for AuthResult {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::default()
        }
    }

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> &str {
        &self.message
    }
}
