use crate::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "oak")]
#[command(about = "Oak AI agent demos: account, session and trial access")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and OAK_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
