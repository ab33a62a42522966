use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "sheetbridge")]
#[command(about = "HTTP proxy for a Google Sheets spreadsheet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on (overrides the PORT environment variable)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the generated route table
    Routes,
    /// Validate configuration and probe the spreadsheet
    Check,
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            commands::serve::run(port).await;
        }
        Commands::Routes => {
            commands::routes::run();
        }
        Commands::Check => {
            commands::check::run().await;
        }
    }
}
