//! CLI tests against a mock backend.
//!
//! Each test isolates session storage with a scratch HOME so runs cannot
//! observe each other's (or the developer's) session file. The backend is a
//! wiremock server; the CLI binary talks to it over real HTTP.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with isolated session storage.
fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_inventory"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Mount a login mock issuing the given token pair.
async fn mount_login(server: &MockServer, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/token/"))
        .and(body_json(json!({
            "username": "alice@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": access,
            "refresh": refresh
        })))
        .mount(server)
        .await;
}

fn login_args(server: &MockServer) -> Vec<String> {
    vec![
        "login".to_string(),
        "--username".to_string(),
        "alice@example.com".to_string(),
        "--password".to_string(),
        "secret123".to_string(),
        "--api".to_string(),
        server.uri(),
    ]
}

fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn login_then_list_items() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server, "test-access-token", "test-refresh-token").await;

    let stdout = run_cli_success(&as_strs(&login_args(&server)), home.path());
    assert!(stdout.contains("Logged in successfully"));

    Mock::given(method("GET"))
        .and(path("/items/"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Hex bolts M6", "sku": "BLT-M6", "quantity": 240}
        ])))
        .mount(&server)
        .await;

    // No --api flag: the base URL recorded at login is used.
    let stdout = run_cli_success(&["items", "list"], home.path());
    assert!(stdout.contains("Hex bolts M6"));
    assert!(stdout.contains("BLT-M6"));
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_session_is_refreshed_transparently() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server, "stale-access", "refresh-1").await;
    run_cli_success(&as_strs(&login_args(&server)), home.path());

    Mock::given(method("GET"))
        .and(path("/items/"))
        .and(header("authorization", "Bearer stale-access"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Given token not valid for any token type",
            "code": "token_not_valid"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .and(body_json(json!({"refresh": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "fresh-access"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/items/"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Wing nuts M4", "sku": "NUT-M4", "quantity": 80}
        ])))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&["items", "list"], home.path());
    assert!(stdout.contains("Wing nuts M4"));

    // The refreshed token was persisted for the next invocation.
    Mock::given(method("GET"))
        .and(path("/categories/"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Fasteners"}
        ])))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&["categories", "list"], home.path());
    assert!(stdout.contains("Fasteners"));
}

#[tokio::test(flavor = "multi_thread")]
async fn dead_session_asks_for_login() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server, "stale-access", "dead-refresh").await;
    run_cli_success(&as_strs(&login_args(&server)), home.path());

    Mock::given(method("GET"))
        .and(path("/items/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Given token not valid for any token type",
            "code": "token_not_valid"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token is invalid or expired",
            "code": "token_not_valid"
        })))
        .mount(&server)
        .await;

    let output = run_cli(&["items", "list"], home.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Session expired"));

    // Teardown cleared the stored tokens.
    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn register_surfaces_field_errors() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "email": ["user with this email already exists."]
        })))
        .mount(&server)
        .await;

    let output = run_cli(
        &[
            "register",
            "--email",
            "alice@example.com",
            "--password",
            "secret123",
            "--api",
            &server.uri(),
        ],
        home.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_the_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    mount_login(&server, "test-access-token", "test-refresh-token").await;
    run_cli_success(&as_strs(&login_args(&server)), home.path());

    let stdout = run_cli_success(&["whoami"], home.path());
    assert!(stdout.contains("alice@example.com"));

    run_cli_success(&["logout"], home.path());

    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());
}

#[test]
fn whoami_without_session_fails() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&["whoami"], home.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[test]
fn items_list_without_session_fails() {
    let home = TempDir::new().unwrap();
    let output = run_cli(&["items", "list"], home.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No API URL recorded"));
}
