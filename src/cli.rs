use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::constants::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "priceboard")]
#[command(about = "Historical daily OHLC price server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Path to the price data CSV file (falls back to DATA_FILE env var)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Show a summary of the price store
    Status {
        /// Path to the price data CSV file (falls back to DATA_FILE env var)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, data } => {
            commands::serve::run(port, data).await;
        }
        Commands::Status { data } => {
            commands::status::run(data);
        }
    }
}
