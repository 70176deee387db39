//! Transaction subcommand implementations.

mod add;
mod delete;
mod edit;
mod list;
mod show;

use anyhow::Result;
use clap::{Args, Subcommand};

use fintrack_http::FinanceApi;

#[derive(Args, Debug)]
pub struct TxCommand {
    #[command(subcommand)]
    pub command: TxSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TxSubcommand {
    /// List transactions, newest first
    List(list::ListArgs),

    /// Show a single transaction
    Show(show::ShowArgs),

    /// Record a new income or expense
    Add(add::AddArgs),

    /// Change fields of an existing transaction
    Edit(edit::EditArgs),

    /// Delete a transaction
    Delete(delete::DeleteArgs),
}

pub async fn handle(api: &FinanceApi, cmd: TxCommand) -> Result<()> {
    match cmd.command {
        TxSubcommand::List(args) => list::run(api, args).await,
        TxSubcommand::Show(args) => show::run(api, args).await,
        TxSubcommand::Add(args) => add::run(api, args).await,
        TxSubcommand::Edit(args) => edit::run(api, args).await,
        TxSubcommand::Delete(args) => delete::run(api, args).await,
    }
}
