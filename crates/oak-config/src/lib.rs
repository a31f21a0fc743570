mod api_config;
mod config;
mod demos_config;
mod error;
mod gate_config;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use demos_config::DemosConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use gate_config::GateConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "OAK_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".oak";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "https://api.oak.voyage/api";
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 600;

const DEFAULT_SESSION_DIR: &str = "session";

const DEFAULT_ADMIN_COUNTDOWN_SECS: u64 = 3;
const MAX_ADMIN_COUNTDOWN_SECS: u64 = 60;

const DEFAULT_TRAVEL_URL: &str = "https://dify.oak.voyage/chatbot/hyurM7gqanrTHVgA";
const DEFAULT_FINANCIAL_URL: &str = "https://dify.oak.voyage/chatbot/puH5D6s9E0KSUKpu";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
