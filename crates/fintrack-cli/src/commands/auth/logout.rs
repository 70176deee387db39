//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(api: &FinanceApi, _args: LogoutArgs) -> Result<()> {
    api.logout().await.context("Failed to clear credentials")?;
    output::success("Logged out");
    Ok(())
}
