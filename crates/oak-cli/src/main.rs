//! oak - Oak AI agent demos CLI
//!
//! Signs in to the Oak account API, keeps the session on disk and opens the
//! trial-gated demos.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! oak login --email a@x.com --password secret1
//!
//! # Start the travel assistant (asks before spending a trial)
//! oak demo travel
//!
//! # Inspect the remaining trials
//! oak trial status --pretty
//! ```

use oak_cli::{App, Cli, CliResult, initialize_logger};
use oak_config::Config;
use oak_session::{ApiClient, FileSessionStore, SessionManager};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<bool> {
    // Flag > OAK_API_BASE_URL > config.toml > default
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    initialize_logger(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let api = ApiClient::with_timeout(&config.api.base_url, config.api.timeout())?;
    let store = FileSessionStore::open(config.session_dir()?)?;
    let session = SessionManager::new(api, Arc::new(store));

    let app = App::new(session, config.gate, config.demos);
    let outcome = app.run(cli.command, &mut std::io::stdin().lock()).await?;

    println!("{}", outcome.render(cli.pretty)?);
    Ok(outcome.success)
}
