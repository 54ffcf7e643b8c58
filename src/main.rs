use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ticketgraph::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "ticketgraph")]
#[command(about = "Daily opened/closed/reopened/open ticket series for issue trackers")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to .ticketgraph/config.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the graph over HTTP for the chart frontend
    Serve,

    /// Compute the graph once and print it as JSON
    Graph {
        /// Trailing window length in days
        #[arg(long)]
        days: Option<u32>,

        /// Only count tickets in this component
        #[arg(long)]
        component: Option<String>,
    },

    /// Bulk-load ticket events from a JSON file
    Import {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Initialize a new .ticketgraph/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Delete all ticket events from the store
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_dir(&PathBuf::from("."))?,
    };

    match cli.command {
        Some(Commands::Serve) | None => {
            cli::serve::serve_command(&config).await?;
        }
        Some(Commands::Graph { days, component }) => {
            cli::graph::graph_command(&config, days, component).await?;
        }
        Some(Commands::Import { file }) => {
            cli::import::import_command(&config, &file).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&PathBuf::from("."), force).await?;
        }
        Some(Commands::Reset { force }) => {
            cli::reset::reset_command(&config, force).await?;
        }
    }

    Ok(())
}
