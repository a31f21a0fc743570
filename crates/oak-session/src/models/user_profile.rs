use crate::TrialCount;

use serde::{Deserialize, Serialize};

/// Cached profile of the signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    /// Ignored when `is_admin` is set
    #[serde(default)]
    pub trial_count: TrialCount,
    #[serde(default)]
    pub is_admin: bool,
    /// Display only
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserProfile {
    /// Local part of the email address, used as the display name
    pub fn display_name(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }

    /// Whether the account may start a gated demo right now
    pub fn has_remaining_trials(&self) -> bool {
        self.is_admin || !self.trial_count.is_exhausted()
    }

    /// Remaining trials as shown to the user
    pub fn remaining_trials(&self) -> TrialCount {
        if self.is_admin {
            TrialCount::Unlimited
        } else {
            self.trial_count
        }
    }
}
