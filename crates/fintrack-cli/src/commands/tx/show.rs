//! Show transaction command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Transaction ID
    pub id: u64,
}

pub async fn run(api: &FinanceApi, args: ShowArgs) -> Result<()> {
    let tx = api
        .get_transaction(args.id)
        .await
        .with_context(|| format!("Failed to fetch transaction {}", args.id))?;

    output::json_pretty(&tx)
}
