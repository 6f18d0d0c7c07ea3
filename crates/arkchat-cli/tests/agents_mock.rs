use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_agents_list_prints_roster() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    let body = serde_json::json!({
        "agents": [
            {"id": 1, "name": "Sales Assistant", "description": "Outreach"},
            {"id": 2, "name": "Support Agent", "description": "Troubleshooting"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/agents/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("arkchat")
        .env("ARKCHAT_HOME", home.path())
        .env("ARKCHAT_BASE_URL", mock_server.uri())
        .args(["agents", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales Assistant"))
        .stdout(predicate::str::contains("Support Agent"));
}

#[tokio::test]
async fn test_agents_list_json_output() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/agents/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "agents": [{"id": 1, "name": "Sales Assistant", "description": "Outreach"}]
        })))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("arkchat")
        .env("ARKCHAT_HOME", home.path())
        .env("ARKCHAT_BASE_URL", mock_server.uri())
        .args(["agents", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Sales Assistant\""));
}

#[tokio::test]
async fn test_agents_list_empty() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/agents/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"agents": []})))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("arkchat")
        .env("ARKCHAT_HOME", home.path())
        .env("ARKCHAT_BASE_URL", mock_server.uri())
        .args(["agents", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No agents found."));
}

#[tokio::test]
async fn test_agents_create_posts_and_reports_id() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/agents/create"))
        .and(body_json(serde_json::json!({
            "name": "Helper",
            "description": "Helps out"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "name": "Helper",
            "description": "Helps out",
            "system_prompt": "You are Helper."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("arkchat")
        .env("ARKCHAT_HOME", home.path())
        .env("ARKCHAT_BASE_URL", mock_server.uri())
        .args([
            "agents",
            "create",
            "--name",
            "Helper",
            "--description",
            "Helps out",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created agent Helper (7)"));
}

#[tokio::test]
async fn test_agents_list_reports_server_error() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/agents/list"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("arkchat")
        .env("ARKCHAT_HOME", home.path())
        .env("ARKCHAT_BASE_URL", mock_server.uri())
        .args(["agents", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));
}
