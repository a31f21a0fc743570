//! oak-cli library
//!
//! Command definitions, validation and the command runner, exported for the
//! `oak` binary and its integration tests.

pub(crate) mod admin_commands;
pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod outcome;
pub(crate) mod password_commands;
pub(crate) mod trial_commands;
pub(crate) mod validation;


pub use admin_commands::AdminCommands;
pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use outcome::Outcome;
pub use password_commands::PasswordCommands;
pub use trial_commands::TrialCommands;
pub use validation::ValidationError;
