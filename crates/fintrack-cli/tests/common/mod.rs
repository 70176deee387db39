use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;
use tokio::process::Command;

/// Isolated HOME plus a credential file path inside it.
pub struct Sandbox {
    _dir: TempDir,
    pub home: PathBuf,
    pub credentials: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        std::fs::create_dir_all(&home).unwrap();
        let credentials = home.join("fintrack").join("credentials.json");
        Self {
            _dir: dir,
            home,
            credentials,
        }
    }

    /// Seed the credential file with an access/refresh pair.
    pub fn with_tokens(self, access: &str, refresh: &str) -> Self {
        std::fs::create_dir_all(self.credentials.parent().unwrap()).unwrap();
        let json = serde_json::json!({"access": access, "refresh": refresh});
        std::fs::write(&self.credentials, json.to_string()).unwrap();
        self
    }

    /// Parsed contents of the credential file.
    pub fn stored(&self) -> serde_json::Value {
        match std::fs::read_to_string(&self.credentials) {
            Ok(json) => serde_json::from_str(&json).unwrap(),
            Err(_) => serde_json::json!({}),
        }
    }
}

/// Run the CLI binary against `api_url` inside the sandbox.
pub async fn run_cli(args: &[&str], sandbox: &Sandbox, api_url: &str) -> Output {
    run_cli_in(args, &sandbox.home, &sandbox.credentials, api_url).await
}

async fn run_cli_in(args: &[&str], home: &Path, credentials: &Path, api_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fintrack"))
        .args(args)
        .env("HOME", home)
        .env("XDG_DATA_HOME", home.join("data"))
        .env("FINTRACK_API_URL", api_url)
        .env("FINTRACK_CREDENTIALS", credentials)
        .env("NO_COLOR", "1")
        .env_remove("FINTRACK_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success; returns stdout.
pub async fn run_cli_success(args: &[&str], sandbox: &Sandbox, api_url: &str) -> String {
    let output = run_cli(args, sandbox, api_url).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
