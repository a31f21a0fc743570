use crate::{ConfigError, ConfigErrorResult, DEFAULT_FINANCIAL_URL, DEFAULT_TRAVEL_URL};

use serde::Deserialize;

/// Hosted chat widget URLs opened once a demo is granted
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemosConfig {
    pub travel_url: String,
    pub financial_url: String,
}

impl Default for DemosConfig {
    fn default() -> Self {
        Self {
            travel_url: String::from(DEFAULT_TRAVEL_URL),
            financial_url: String::from(DEFAULT_FINANCIAL_URL),
        }
    }
}

impl DemosConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, url) in [
            ("demos.travel_url", &self.travel_url),
            ("demos.financial_url", &self.financial_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ConfigError::demos(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }

    /// Widget URL for a demo tag, if one is configured
    pub fn url_for(&self, demo_type: &str) -> Option<&str> {
        match demo_type {
            "travel" => Some(self.travel_url.as_str()),
            "financial" => Some(self.financial_url.as_str()),
            _ => None,
        }
    }
}
