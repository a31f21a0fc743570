use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_COUNTDOWN_SECS, MAX_ADMIN_COUNTDOWN_SECS};

use std::time::Duration;

use serde::Deserialize;

/// Trial gate behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Seconds an admin waits before a demo auto-starts (0 = immediately)
    pub admin_countdown_secs: u64,
    /// Record admin demo usage on the server. Failures never block the admin.
    pub audit_admin_usage: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            admin_countdown_secs: DEFAULT_ADMIN_COUNTDOWN_SECS,
            audit_admin_usage: false,
        }
    }
}

impl GateConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.admin_countdown_secs > MAX_ADMIN_COUNTDOWN_SECS {
            return Err(ConfigError::gate(format!(
                "gate.admin_countdown_secs must be 0-{}, got {}",
                MAX_ADMIN_COUNTDOWN_SECS, self.admin_countdown_secs
            )));
        }

        Ok(())
    }

    pub fn admin_countdown(&self) -> Duration {
        Duration::from_secs(self.admin_countdown_secs)
    }
}
