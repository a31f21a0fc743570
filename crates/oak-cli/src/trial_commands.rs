use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TrialCommands {
    /// Remaining trials as the server sees them
    Status,
    /// Permission flags and recent usage
    Permissions,
}
