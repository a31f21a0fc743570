use crate::{ApiOutcome, UserProfile};

use serde::{Deserialize, Serialize};

/// One row of the admin user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserEntry {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub total_usage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminUsersResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "msg")]
    pub message: String,
    #[serde(default)]
    pub users: Vec<AdminUserEntry>,
    #[serde(default)]
    pub total_users: usize,
}

impl ApiOutcome for AdminUsersResult {
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
