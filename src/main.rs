use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// fitcoach - grocery lists from nutrition plans
#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(about = "Fitness coaching backend: nutrition plans and grocery lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Print the grocery list derived from a nutrition plan JSON file
    Extract {
        /// Nutrition plan document
        plan: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fitcoach::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fitcoach::observability::init_observability(
        "fitcoach",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => fitcoach::cli::serve(config, host, port).await,
        Commands::Migrate => fitcoach::cli::migrate(&config).await,
        Commands::Reset => fitcoach::cli::reset(&config).await,
        Commands::Extract { plan } => fitcoach::cli::extract(&plan),
    }
}
