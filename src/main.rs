mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod view;
mod workflow;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::search::SearchArgs;
use crate::cmd::tickets::TicketsArgs;
use crate::cmd::{console, health, search, tickets};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Parser)]
#[command(
    name = "ticketlens",
    author,
    version,
    about = "Support-desk ticket console with semantic search"
)]
struct Cli {
    /// Base URL of the TicketLens API (overrides TICKETLENS_API_URL and stored config).
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Log request and state transitions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive ticket console.
    Console,
    /// List or create tickets.
    Tickets(TicketsArgs),
    /// Run a semantic search over existing tickets.
    Search(SearchArgs),
    /// Check that the API is reachable.
    Health,
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Console => console::run(&connect(cli.api_url)?).await,
        Commands::Tickets(args) => tickets::run(&connect(cli.api_url)?, args.command).await,
        Commands::Search(args) => search::run(&connect(cli.api_url)?, args).await,
        Commands::Health => health::run(&connect(cli.api_url)?).await,
    }
}

fn connect(api_url: Option<String>) -> AppResult<AppContext> {
    let config = AppConfig::load(api_url)?;
    tracing::debug!(api = %config.api_base_url, timeout = ?config.request_timeout, "configuration resolved");
    AppContext::from_config(config)
}
