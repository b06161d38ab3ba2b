use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

mod card;
mod cli;
mod client;
mod clipboard;
mod commands;
mod error;
mod form;
mod logging;
mod notice;
mod render;

use cli::Cli;
use error::CliError;
use logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    info!("capstone CLI starting");
    debug!("CLI arguments: {:?}", cli);

    match cli.run().await {
        Ok(_) => {
            debug!("capstone CLI completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("CLI error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
