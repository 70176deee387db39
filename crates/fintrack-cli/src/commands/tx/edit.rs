//! Edit transaction command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use fintrack_core::{Amount, NewTransaction, TransactionType};
use fintrack_http::FinanceApi;

use crate::output;

/// Fields left out keep their current value.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Transaction ID
    pub id: u64,

    #[arg(long)]
    pub amount: Option<Amount>,

    #[arg(long = "type")]
    pub kind: Option<TransactionType>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,

    /// Date as YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub async fn run(api: &FinanceApi, args: EditArgs) -> Result<()> {
    let current = api
        .get_transaction(args.id)
        .await
        .with_context(|| format!("Failed to fetch transaction {}", args.id))?;

    let mut update = NewTransaction::from(current);
    if let Some(amount) = args.amount {
        update.amount = amount;
    }
    if let Some(kind) = args.kind {
        update.kind = kind;
    }
    if let Some(category) = args.category {
        update.category = category;
    }
    // An omitted field is left unchanged by a PUT, so send an empty one.
    if args.clear_description {
        update.description = Some(String::new());
    } else if let Some(description) = args.description {
        update.description = Some(description);
    }
    if let Some(date) = args.date {
        update.date = Some(date);
    }

    let updated = api
        .update_transaction(args.id, &update)
        .await
        .with_context(|| format!("Failed to update transaction {}", args.id))?;

    output::success(&format!("Updated transaction {}", updated.id));
    output::transaction_row(&updated);
    Ok(())
}
