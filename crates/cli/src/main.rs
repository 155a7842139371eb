//! Hynicl CLI — the main entry point.
//!
//! Commands:
//! - `onboard` — Write the default configuration file
//! - `run`     — Assemble the swarm and enter the interactive loop
//! - `task`    — Run a single task and exit
//! - `models`  — List models available at the local endpoint

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "hynicl",
    about = "Hynicl — a role-specialized agent swarm on a local model",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration file
    Onboard,

    /// Assemble the swarm and enter the interactive loop
    Run,

    /// Run a single task and exit
    Task {
        /// The task text
        task: String,
    },

    /// List models available at the local endpoint
    Models,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Run => commands::run::run().await?,
        Commands::Task { task } => commands::task::run(&task).await?,
        Commands::Models => commands::models::run().await?,
    }

    Ok(())
}
