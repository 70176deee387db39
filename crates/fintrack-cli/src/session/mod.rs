//! Session wiring: where credentials live and how the client is built.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use directories::ProjectDirs;
use tracing::{debug, warn};

use fintrack_core::ApiUrl;
use fintrack_file::FileCredentialStore;
use fintrack_http::{ApiClient, FinanceApi};

use crate::cli::GlobalArgs;

const CREDENTIALS_FILE: &str = "credentials.json";

/// Resolve the credential file: `--credentials` if given, otherwise the
/// platform data directory.
pub fn credentials_path(global: &GlobalArgs) -> Result<PathBuf> {
    if let Some(path) = &global.credentials {
        return Ok(path.clone());
    }

    let dirs =
        ProjectDirs::from("", "", "fintrack").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join(CREDENTIALS_FILE))
}

/// Build the API facade backed by the on-disk credential store.
pub fn connect(global: &GlobalArgs) -> Result<FinanceApi> {
    let api_url = ApiUrl::new(&global.api_url).context("Invalid API URL")?;
    let path = credentials_path(global)?;
    debug!(path = %path.display(), api = %api_url, "Using credential file");
    let store = FileCredentialStore::new(path);

    let client = ApiClient::builder(api_url)
        .credential_store(store)
        .login_redirect(session_expired)
        .build()
        .context("Failed to build API client")?;

    Ok(FinanceApi::new(client))
}

/// A CLI has no login page; tell the user how to get one.
fn session_expired(route: &str) {
    warn!(route, "Session expired, stored credentials were cleared");
    eprintln!(
        "{} Session expired. Run '{}' to sign in again.",
        "!".yellow(),
        "fintrack auth login".bold()
    );
}
