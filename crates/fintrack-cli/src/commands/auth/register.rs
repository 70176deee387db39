//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fintrack_core::NewUser;
use fintrack_http::FinanceApi;

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long, env = "FINTRACK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(api: &FinanceApi, args: RegisterArgs) -> Result<()> {
    let new_user = NewUser {
        name: args.name,
        email: args.email,
        username: args.username,
        password: args.password,
    };

    let user = api
        .register(&new_user)
        .await
        .context("Failed to register")?;

    output::success("Account created");
    println!();
    output::field("ID", &user.id.to_string());
    output::field("User", &user.username);
    output::field("Email", &user.email);
    println!();
    println!("Run 'fintrack auth login' to sign in.");

    Ok(())
}
