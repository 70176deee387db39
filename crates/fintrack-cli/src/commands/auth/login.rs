//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fintrack_core::Credentials;
use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "FINTRACK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(api: &FinanceApi, args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let user = api.login(&credentials).await.context("Failed to login")?;

    output::success("Logged in successfully");
    if let Some(user) = user {
        println!();
        output::field("User", &user.username);
        output::field("Email", &user.email);
    }

    Ok(())
}
