//! Status command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Status<'a> {
    api: &'a str,
    authenticated: bool,
    has_refresh_token: bool,
}

pub async fn run(api: &FinanceApi, args: StatusArgs) -> Result<()> {
    let store = api.client().credentials();
    let status = Status {
        api: api.client().api().as_str(),
        authenticated: api.is_authenticated().await?,
        has_refresh_token: store.refresh_token().await?.is_some(),
    };

    if args.json {
        return output::json(&status);
    }

    output::field("API", status.api);
    if status.authenticated {
        output::field("Session", &"logged in".green().to_string());
    } else {
        output::field("Session", &"not logged in".yellow().to_string());
    }
    if status.authenticated && !status.has_refresh_token {
        output::error("No refresh token stored; the session ends when the access token expires");
    }

    Ok(())
}
