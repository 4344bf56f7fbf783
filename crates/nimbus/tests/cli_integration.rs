//! CLI integration tests for the Nimbus command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Missing credentials and bad config are reported before any network use
//! - The tools command lists a provider catalog served locally

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the nimbus binary.
fn nimbus() -> Command {
    Command::cargo_bin("nimbus").unwrap()
}

/// A nimbus command isolated from the developer's environment.
///
/// Runs in an empty directory (no `.env`), with config and log directories
/// pointed at it and all credential variables removed.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = nimbus();
    cmd.current_dir(dir.path())
        .env("NIMBUS_CONFIG_DIR", dir.path())
        .env("XDG_DATA_HOME", dir.path())
        .env_remove("NIMBUS_CONFIG")
        .env_remove("NIMBUS_MCP_URL")
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_MODEL")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("XWEATHER_TOKEN")
        .env_remove("XWEATHER_CLIENT_ID")
        .env_remove("XWEATHER_CLIENT_SECRET")
        .env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    nimbus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nimbus"));
}

#[test]
fn test_version_displays() {
    nimbus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nimbus"));
}

#[test]
fn test_help_lists_subcommands() {
    nimbus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("tools"));
}

#[test]
fn test_help_lists_global_options() {
    nimbus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--config"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Parsing Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ask_requires_question() {
    nimbus()
        .arg("ask")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_unknown_subcommand_fails() {
    nimbus()
        .arg("forecast-everything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_tools_help_shows_json_flag() {
    nimbus()
        .args(["tools", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration and Credential Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ask_without_openai_key_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .env("XWEATHER_TOKEN", "id_secret")
        .args(["ask", "weather in Paris?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_ask_without_xweather_credentials_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .env("OPENAI_API_KEY", "sk-test")
        .args(["ask", "weather in Paris?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("XWEATHER_TOKEN"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_tools_without_credentials_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .arg("tools")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Xweather credentials not found"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    isolated(&dir)
        .arg("--config")
        .arg(&missing)
        .arg("tools")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_invalid_config_value_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[agent]\nmax_tool_rounds = 0\n",
    )
    .unwrap();

    isolated(&dir)
        .env("XWEATHER_TOKEN", "id_secret")
        .arg("tools")
        .assert()
        .failure()
        .stderr(predicate::str::contains("agent.max_tool_rounds"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tools Command Against a Local Provider
// ─────────────────────────────────────────────────────────────────────────────

async fn tools_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer id_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "tools": [
                    {"name": "xweather_get_current_weather", "description": "Current conditions"},
                    {"name": "xweather_get_forecast", "description": "Daily forecast\nUp to 15 days"},
                    {"description": "orphan entry without a name"}
                ]
            }
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tools_lists_catalog() {
    let server = tools_server().await;
    let dir = TempDir::new().unwrap();
    let mut cmd = isolated(&dir);
    cmd.env("XWEATHER_TOKEN", "id_secret")
        .env("NIMBUS_MCP_URL", format!("{}/mcp", server.uri()))
        .arg("tools");

    let assert = tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap();
    assert
        .success()
        .stdout(predicate::str::contains("xweather_get_current_weather"))
        .stdout(predicate::str::contains("Daily forecast"))
        .stdout(predicate::str::contains("Up to 15 days").not())
        .stdout(predicate::str::contains("orphan entry").not())
        .stdout(predicate::str::contains("header auth"))
        .stdout(predicate::str::contains("2 tools"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tools_json_output() {
    let server = tools_server().await;
    let dir = TempDir::new().unwrap();
    let mut cmd = isolated(&dir);
    cmd.env("XWEATHER_TOKEN", "id_secret")
        .env("NIMBUS_MCP_URL", format!("{}/mcp", server.uri()))
        .args(["tools", "--json"]);

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["auth_mode"], "header");
    assert_eq!(value["tools"].as_array().unwrap().len(), 2);
    assert_eq!(value["tools"][1]["name"], "xweather_get_forecast");
}
