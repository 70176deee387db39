//! CLI integration tests against a mock finance API.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{Sandbox, run_cli, run_cli_success};

fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}/api", server.address().port())
}

fn transaction(id: u64, amount: &str, kind: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user": 1,
        "amount": amount,
        "type": kind,
        "category": category,
        "description": null,
        "date": "2024-03-01"
    })
}

#[tokio::test]
async fn test_login_then_list() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new();
    let url = api_url(&server);

    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .and(body_json(json!({"email": "a@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "A1",
            "refresh": "R1",
            "user": {"id": 1, "name": "Alice", "email": "a@example.com", "username": "alice"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/transactions/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            transaction(2, "40.00", "expense", "Food"),
            transaction(1, "1000.00", "income", "Salary"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &["auth", "login", "--email", "a@example.com", "--password", "pw"],
        &sandbox,
        &url,
    )
    .await;
    assert!(stdout.contains("alice"));
    assert_eq!(sandbox.stored(), json!({"access": "A1", "refresh": "R1"}));

    let stdout = run_cli_success(&["tx", "list", "--json"], &sandbox, &url).await;
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "Food");
    assert_eq!(rows[1]["type"], "income");
}

#[tokio::test]
async fn test_list_filters_by_type() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new().with_tokens("A1", "R1");
    let url = api_url(&server);

    Mock::given(method("GET"))
        .and(path("/api/transactions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            transaction(2, "40.00", "expense", "Food"),
            transaction(1, "1000.00", "income", "Salary"),
        ])))
        .mount(&server)
        .await;

    let stdout =
        run_cli_success(&["tx", "list", "--type", "expense", "--json"], &sandbox, &url).await;
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Food"));
}

#[tokio::test]
async fn test_expired_access_token_is_refreshed() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new().with_tokens("A1", "R1");
    let url = api_url(&server);

    Mock::given(method("GET"))
        .and(path("/api/insights/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .and(body_json(json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/insights/"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "You spent 40.00 on Food",
            "suggestion": "Cook at home"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&["insights", "--json"], &sandbox, &url).await;
    let insights: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(insights["suggestion"], "Cook at home");
    assert_eq!(sandbox.stored(), json!({"access": "A2", "refresh": "R1"}));
}

#[tokio::test]
async fn test_failed_refresh_clears_session() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new().with_tokens("A1", "R1");
    let url = api_url(&server);

    Mock::given(method("GET"))
        .and(path("/api/transactions/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is blacklisted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["tx", "list"], &sandbox, &url).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Session expired"), "stderr: {}", stderr);
    assert!(stderr.contains("Token is expired"), "stderr: {}", stderr);
    assert_eq!(sandbox.stored(), json!({}));
}

#[tokio::test]
async fn test_edit_keeps_unchanged_fields() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new().with_tokens("A1", "R1");
    let url = api_url(&server);

    Mock::given(method("GET"))
        .and(path("/api/transactions/7/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(transaction(7, "40.00", "expense", "Food")),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/transactions/7/"))
        .and(body_partial_json(json!({
            "amount": "55.25",
            "type": "expense",
            "category": "Food",
            "date": "2024-03-01"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(transaction(7, "55.25", "expense", "Food")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&["tx", "edit", "7", "--amount", "55.25"], &sandbox, &url).await;
    assert!(stdout.contains("Updated transaction 7"));
}

#[tokio::test]
async fn test_add_rejects_invalid_amount() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new().with_tokens("A1", "R1");
    let url = api_url(&server);

    let output = run_cli(
        &[
            "tx", "add", "--amount", "12.345", "--type", "expense", "--category", "Food",
        ],
        &sandbox,
        &url,
    )
    .await;

    assert!(!output.status.success());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_logout_and_status() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new().with_tokens("A1", "R1");
    let url = api_url(&server);

    let stdout = run_cli_success(&["auth", "status", "--json"], &sandbox, &url).await;
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["authenticated"], true);

    run_cli_success(&["auth", "logout"], &sandbox, &url).await;
    assert_eq!(sandbox.stored(), json!({}));

    let stdout = run_cli_success(&["auth", "status", "--json"], &sandbox, &url).await;
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["authenticated"], false);
    assert_eq!(status["has_refresh_token"], false);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_verbose_logs_go_to_stderr() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new();
    let url = api_url(&server);

    let output = run_cli(&["-vv", "auth", "status", "--json"], &sandbox, &url).await;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using credential file"), "stderr: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let status: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(status["authenticated"], false);
}

#[tokio::test]
async fn test_session_expiry_is_logged() {
    let server = MockServer::start().await;
    let sandbox = Sandbox::new();
    let url = api_url(&server);

    Mock::given(method("GET"))
        .and(path("/api/insights/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Authentication credentials were not provided."
        })))
        .mount(&server)
        .await;

    let output = run_cli(&["insights"], &sandbox, &url).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stored credentials were cleared"), "stderr: {}", stderr);
    assert!(stderr.contains("fintrack auth login"), "stderr: {}", stderr);
}
