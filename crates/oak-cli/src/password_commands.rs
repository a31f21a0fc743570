use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PasswordCommands {
    /// Change the password of the signed-in account
    Change {
        /// Current password
        #[arg(long)]
        current: String,
        /// New password
        #[arg(long = "new")]
        new_password: String,
        /// New password again
        #[arg(long)]
        confirm: String,
    },
}
