//! Subcommand implementations.

pub mod auth;
pub mod insights;
pub mod tx;
