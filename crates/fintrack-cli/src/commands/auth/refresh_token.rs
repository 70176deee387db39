//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

/// Runs the same exchange the client performs after a 401, without the
/// clear-and-redirect on failure.
pub async fn run(api: &FinanceApi, _args: RefreshTokenArgs) -> Result<()> {
    api.client()
        .refresh_access_token()
        .await
        .context("Failed to refresh access token")?;

    output::success("Access token refreshed");
    Ok(())
}
