//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::insights::InsightsArgs;
use crate::commands::tx::TxCommand;

/// Personal finance tracker CLI.
#[derive(Parser, Debug)]
#[command(name = "fintrack")]
#[command(author, version = env!("FINTRACK_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API base URL, including the /api prefix
    #[arg(
        long,
        env = "FINTRACK_API_URL",
        default_value = fintrack_core::types::DEFAULT_API_URL,
        global = true
    )]
    pub api_url: String,

    /// Credential file (defaults to the platform data directory)
    #[arg(long, env = "FINTRACK_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, log out, and manage the session
    Auth(AuthCommand),

    /// Create, list, edit, and delete transactions
    Tx(TxCommand),

    /// Show spending insights
    Insights(InsightsArgs),
}
