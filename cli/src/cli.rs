use clap::{Parser, Subcommand};
use shared_types::ProjectCategory;

use crate::{commands, error::CliError};
use commands::*;

#[derive(Debug, Parser)]
#[command(name = "capstone")]
#[command(about = "Generate capstone project ideas from a keyword")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Base URL of the generator server
    #[arg(long, global = true, env = "CAPSTONE_SERVER_URL")]
    pub server: Option<String>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a capstone project proposal
    Generate {
        /// Keyword or field of study (prompted for when omitted)
        keyword: Option<String>,

        /// Project category, see `capstone categories`
        #[arg(short, long)]
        category: Option<ProjectCategory>,

        /// Keep the card open for copy/favorite/next actions
        #[arg(short, long)]
        interactive: bool,

        /// Print the project as JSON instead of a card
        #[arg(long, conflicts_with = "interactive")]
        json: bool,
    },

    /// List project categories
    Categories,

    /// Check that the generator server is reachable
    Status,

    /// Show version information
    Version,
}

impl Cli {
    pub async fn run(&self) -> Result<(), CliError> {
        match &self.command {
            Some(Commands::Generate {
                keyword,
                category,
                interactive,
                json,
            }) => {
                let options = GenerateOptions {
                    keyword: keyword.clone(),
                    category: *category,
                    interactive: *interactive,
                    json: *json,
                };
                generate_project(self.server.clone(), &options).await
            }
            Some(Commands::Categories) => list_categories().await,
            Some(Commands::Status) => check_server_status(self.server.clone()).await,
            Some(Commands::Version) => self.handle_version().await,
            None => {
                println!("capstone CLI - generate capstone project ideas");
                println!("Run 'capstone --help' for usage information.");
                Ok(())
            }
        }
    }

    async fn handle_version(&self) -> Result<(), CliError> {
        println!("capstone CLI version: {}", env!("CARGO_PKG_VERSION"));
        println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
        Ok(())
    }
}
