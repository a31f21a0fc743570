use crate::{DenyReason, TrialCount};

use serde::Serialize;

/// Progress of one attempt to open a gated demo.
///
/// `Idle -> Checking -> Granted | Denied`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GateState {
    #[default]
    Idle,
    Checking,
    Granted {
        /// Trials left after this one (`unlimited` for admins)
        remaining: TrialCount,
    },
    Denied {
        reason: DenyReason,
    },
}

impl GateState {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Granted { .. } | Self::Denied { .. })
    }
}
