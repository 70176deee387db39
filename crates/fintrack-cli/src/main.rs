//! fintrack - CLI for the personal finance API.
//!
//! A thin front end over `fintrack-http`: every command goes through the
//! authenticated client, so expired access tokens are refreshed
//! transparently and a dead session sends the user back to `auth login`.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{auth, insights, tx};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let api = session::connect(&cli.global)?;

    match cli.command {
        Commands::Auth(cmd) => auth::handle(&api, cmd).await,
        Commands::Tx(cmd) => tx::handle(&api, cmd).await,
        Commands::Insights(args) => insights::run(&api, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so command output stays machine-readable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
