use oak_session::DEFAULT_RESET_TRIAL_COUNT;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List every account with its usage
    Users,
    /// Reset an account's trial count
    ResetTrials {
        /// User ID
        id: i64,
        #[arg(long, default_value_t = DEFAULT_RESET_TRIAL_COUNT)]
        count: u32,
    },
}
