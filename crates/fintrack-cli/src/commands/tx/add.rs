//! Add transaction command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use fintrack_core::{Amount, NewTransaction, TransactionType};
use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, e.g. 12.50
    #[arg(long)]
    pub amount: Amount,

    /// income or expense
    #[arg(long = "type")]
    pub kind: TransactionType,

    /// Category, e.g. Food
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Date as YYYY-MM-DD (server default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub async fn run(api: &FinanceApi, args: AddArgs) -> Result<()> {
    let new = NewTransaction {
        amount: args.amount,
        kind: args.kind,
        category: args.category,
        description: args.description,
        date: args.date,
    };

    let created = api
        .create_transaction(&new)
        .await
        .context("Failed to create transaction")?;

    output::success(&format!("Created transaction {}", created.id));
    output::transaction_row(&created);
    Ok(())
}
