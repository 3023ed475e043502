mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::ticket::{self, OutputArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Parser)]
#[command(name = "tickets", author, version, about = "In-memory support ticket tracker")]
struct Cli {
    /// Tickets JSON document, relative to the current directory.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Disable the simulated per-operation latency.
    #[arg(long, global = true)]
    no_latency: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every ticket in load order.
    List(OutputArgs),
    /// Show a single ticket.
    Show {
        id: i32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Change the status of a ticket ("Abierto", "En progreso" or "Cerrado").
    SetStatus { id: i32, status: String },
    /// Inspect CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?
        .with_data_path(cli.data)
        .with_latency_disabled(cli.no_latency);

    match cli.command {
        Commands::Config(args) => config_cmd::run(&config, args.command),
        Commands::List(output) => ticket::list(&AppContext::from_config(config), output).await,
        Commands::Show { id, output } => {
            ticket::show(&AppContext::from_config(config), id, output).await
        }
        Commands::SetStatus { id, status } => {
            ticket::set_status(&AppContext::from_config(config), id, &status).await
        }
    }
}
