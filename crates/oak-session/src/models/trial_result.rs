use crate::{ApiOutcome, TrialCount};

use serde::{Deserialize, Serialize};

/// Result of consuming or checking a trial
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrialResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "msg")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_trials: Option<TrialCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_trials: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ApiOutcome for TrialResult {
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
