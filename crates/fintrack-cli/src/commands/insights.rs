//! Insights command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

pub async fn run(api: &FinanceApi, args: InsightsArgs) -> Result<()> {
    let insights = api.insights().await.context("Failed to fetch insights")?;

    if args.json {
        return output::json_pretty(&insights);
    }

    output::field("Summary", &insights.summary);
    output::field("Suggestion", &insights.suggestion);
    Ok(())
}
