//! Auth subcommand implementations.

mod login;
mod logout;
mod refresh_token;
mod register;
mod status;

use anyhow::Result;
use clap::{Args, Subcommand};

use fintrack_http::FinanceApi;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and store the issued tokens
    Login(login::LoginArgs),

    /// Delete the stored tokens
    Logout(logout::LogoutArgs),

    /// Create a new account
    Register(register::RegisterArgs),

    /// Exchange the refresh token for a new access token
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// Show whether a session is stored
    Status(status::StatusArgs),
}

pub async fn handle(api: &FinanceApi, cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(api, args).await,
        AuthSubcommand::Logout(args) => logout::run(api, args).await,
        AuthSubcommand::Register(args) => register::run(api, args).await,
        AuthSubcommand::RefreshToken(args) => refresh_token::run(api, args).await,
        AuthSubcommand::Status(args) => status::run(api, args).await,
    }
}
