//! Delete transaction command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Transaction ID
    pub id: u64,
}

pub async fn run(api: &FinanceApi, args: DeleteArgs) -> Result<()> {
    api.delete_transaction(args.id)
        .await
        .with_context(|| format!("Failed to delete transaction {}", args.id))?;

    output::success(&format!("Deleted transaction {}", args.id));
    Ok(())
}
