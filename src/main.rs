//! Courier - relays chat commands to Vault's transit encryption engine.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use courier::config::Config;
use courier::error::Result;
use courier::relay::Relay;
use courier::telegram::Bot;
use courier::transit::HttpTransit;

/// Relay chat commands to Vault's transit encryption engine.
#[derive(Parser)]
#[command(
    name = "courier",
    about = "Relay chat commands to Vault's transit encryption engine",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Per-request timeout for Vault calls, in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("COURIER_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("courier=debug")
        } else {
            EnvFilter::new("courier=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env_with_timeout(cli.timeout_ms)?;
    let transit = HttpTransit::new(&config)?;
    let relay = Relay::new(transit);
    let bot = Bot::new(&config.telegram_token)?;

    tracing::info!("starting courier");
    bot.run(&relay)
}
