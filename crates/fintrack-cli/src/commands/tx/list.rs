//! List transactions command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fintrack_core::TransactionType;
use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one kind of transaction (income or expense)
    #[arg(long = "type")]
    pub kind: Option<TransactionType>,

    /// Output one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(api: &FinanceApi, args: ListArgs) -> Result<()> {
    let transactions = api
        .list_transactions()
        .await
        .context("Failed to list transactions")?;

    let selected = transactions
        .iter()
        .filter(|tx| args.kind.is_none_or(|kind| tx.kind == kind));

    if args.json {
        for tx in selected {
            output::json(tx)?;
        }
        return Ok(());
    }

    let mut count = 0;
    for tx in selected {
        output::transaction_row(tx);
        count += 1;
    }
    if count == 0 {
        eprintln!("{}", "No transactions".dimmed());
    }

    Ok(())
}
