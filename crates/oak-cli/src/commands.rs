use crate::{AdminCommands, PasswordCommands, TrialCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session on this device
    Logout,

    /// Show the signed-in account
    Whoami {
        /// Fetch the profile from the server first
        #[arg(long)]
        refresh: bool,
    },

    /// Trial balance and usage
    Trial {
        #[command(subcommand)]
        action: TrialCommands,
    },

    /// Start a gated demo (travel, financial or any other tag)
    Demo {
        agent: String,
        /// Skip the confirmation prompt and the admin countdown
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Password operations
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },

    /// Admin operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
