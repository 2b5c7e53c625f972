//! End-to-end tests for the HTTP API.
//!
//! Each test binds the router to an ephemeral port and talks to it over HTTP.

use std::path::Path;
use std::sync::Arc;

use mission_control::api::{router, AppState};
use mission_control::config::{BackendConfig, Config};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Nothing listens on port 1
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn config(backend_url: &str, memory_dir: &Path) -> Config {
    Config {
        backend: BackendConfig {
            base_url: backend_url.to_string(),
            token: "test-token".to_string(),
        },
        memory_dir: memory_dir.to_path_buf(),
        ..Config::default()
    }
}

async fn spawn_app(config: Config) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(AppState::from_config(&config)));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn get_json(url: &str) -> Value {
    let response = reqwest::get(url).await.unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

async fn post_json(url: &str, body: Value) -> Value {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

fn column_ids(body: &Value, column: usize) -> Vec<String> {
    body["columns"][column]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;

    let body = get_json(&format!("{}/api/health", base)).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cron_unreachable_backend_returns_mock_jobs() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;

    let body = get_json(&format!("{}/api/cron", base)).await;
    let jobs = body["jobs"].as_array().unwrap();

    assert_eq!(jobs.len(), 6);
    assert!(jobs.iter().all(|j| j["enabled"] == true));
    assert_eq!(jobs[0]["name"], "Daily AM Plan");
}

#[tokio::test]
async fn test_cron_backend_error_status_returns_mock_jobs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cron/list"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(&server.uri(), temp_dir.path())).await;

    let body = get_json(&format!("{}/api/cron", base)).await;
    assert_eq!(body["jobs"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_cron_passthrough() {
    let server = MockServer::start().await;
    let live = json!({
        "jobs": [
            { "id": "abc", "name": "Live Job", "schedule": { "expr": "* * * * *" }, "enabled": false }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/cron/list"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live.clone()))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(&server.uri(), temp_dir.path())).await;

    let body = get_json(&format!("{}/api/cron", base)).await;
    assert_eq!(body, live);
}

#[tokio::test]
async fn test_sessions_unreachable_backend_returns_mock_session() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;

    let body = get_json(&format!("{}/api/sessions", base)).await;
    let sessions = body["sessions"].as_array().unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["sessionKey"], "agent:main:main");
    assert_eq!(sessions[0]["status"], "active");
}

#[tokio::test]
async fn test_sessions_passthrough() {
    let server = MockServer::start().await;
    let live = json!({ "sessions": [{ "sessionKey": "agent:ops:1" }, { "sessionKey": "agent:ops:2" }] });
    Mock::given(method("GET"))
        .and(path("/api/sessions/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live.clone()))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(&server.uri(), temp_dir.path())).await;

    let body = get_json(&format!("{}/api/sessions", base)).await;
    assert_eq!(body, live);
}

#[tokio::test]
async fn test_memory_missing_directory_returns_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, &temp_dir.path().join("missing"))).await;

    let body = get_json(&format!("{}/api/memory", base)).await;
    let files = body["files"].as_array().unwrap();

    let names: Vec<_> = files.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["2026-02-19.md", "2026-02-18.md", "MEMORY.md"]);
    assert_eq!(files[2]["type"], "core");
}

#[tokio::test]
async fn test_memory_listing_search_and_content() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("notion")).unwrap();
    std::fs::write(root.join("MEMORY.md"), "long-term").unwrap();
    std::fs::write(root.join("notion").join("Appealio.md"), "brief").unwrap();
    let base = spawn_app(config(UNREACHABLE, root)).await;

    let body = get_json(&format!("{}/api/memory", base)).await;
    assert_eq!(body["files"].as_array().unwrap().len(), 2);

    let body = get_json(&format!("{}/api/memory?search=APPEAL", base)).await;
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "notion/Appealio.md");
    assert_eq!(files[0]["type"], "synced");

    let body = get_json(&format!("{}/api/memory?file=notion/Appealio.md", base)).await;
    assert_eq!(body, json!({ "content": "brief" }));
}

#[tokio::test]
async fn test_memory_unreadable_file_returns_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("memory");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(temp_dir.path().join("secret.md"), "outside").unwrap();
    let base = spawn_app(config(UNREACHABLE, &root)).await;

    for file in ["nope.md", "../secret.md"] {
        let body = get_json(&format!("{}/api/memory?file={}", base, file)).await;
        assert!(body.get("content").is_none());
        assert_eq!(body["files"].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn test_tasks_list_columns() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;

    let body = get_json(&format!("{}/api/tasks", base)).await;

    let titles: Vec<_> = body["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Backlog", "In Progress", "Done"]);
    assert_eq!(column_ids(&body, 0), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_tasks_add() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;
    let url = format!("{}/api/tasks", base);

    let body = post_json(&url, json!({ "column": "backlog", "title": "Write spec" })).await;

    assert_eq!(body["applied"], true);
    assert_eq!(body["taskId"], "9");
    let backlog = body["columns"][0]["tasks"].as_array().unwrap();
    assert_eq!(backlog.len(), 4);
    assert_eq!(backlog[3]["title"], "Write spec");
    assert_eq!(backlog[3]["assignee"], "agent");
    assert_eq!(backlog[3]["priority"], "medium");
    assert_eq!(backlog[3]["createdAt"], "Just now");

    // The change is visible to later reads
    let listed = get_json(&url).await;
    assert_eq!(listed["columns"], body["columns"]);
}

#[tokio::test]
async fn test_tasks_add_invalid_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;
    let url = format!("{}/api/tasks", base);
    let before = get_json(&url).await;

    let body = post_json(&url, json!({ "column": "backlog", "title": "  " })).await;
    assert_eq!(body["applied"], false);
    assert!(body["rejected"].is_string());
    assert_eq!(body["columns"], before["columns"]);

    let body = post_json(&url, json!({ "column": "someday", "title": "Later" })).await;
    assert_eq!(body["applied"], false);
    assert!(body["rejected"].as_str().unwrap().contains("someday"));
    assert_eq!(body["columns"], before["columns"]);
}

#[tokio::test]
async fn test_tasks_move() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;
    let url = format!("{}/api/tasks/move", base);

    let body = post_json(
        &url,
        json!({
            "draggableId": "4",
            "source": { "droppableId": "in-progress", "index": 0 },
            "destination": { "droppableId": "done", "index": 3 }
        }),
    )
    .await;

    assert_eq!(body["applied"], true);
    assert_eq!(column_ids(&body, 1), vec!["5"]);
    assert_eq!(column_ids(&body, 2), vec!["6", "7", "8", "4"]);
}

#[tokio::test]
async fn test_tasks_move_noops_and_rejections() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;
    let url = format!("{}/api/tasks/move", base);
    let before = get_json(&format!("{}/api/tasks", base)).await;

    let drops = [
        // Dropped outside the board
        json!({ "draggableId": "1", "source": { "droppableId": "backlog", "index": 0 }, "destination": null }),
        // Dropped in place
        json!({ "draggableId": "1", "source": { "droppableId": "backlog", "index": 0 },
                "destination": { "droppableId": "backlog", "index": 0 } }),
        // Index past the end of the destination
        json!({ "draggableId": "1", "source": { "droppableId": "backlog", "index": 0 },
                "destination": { "droppableId": "done", "index": 9 } }),
        // Stale card position
        json!({ "draggableId": "8", "source": { "droppableId": "backlog", "index": 0 },
                "destination": { "droppableId": "done", "index": 0 } }),
    ];

    for drop in drops {
        let body = post_json(&url, drop).await;
        assert_eq!(body["applied"], false);
        assert_eq!(body["columns"], before["columns"]);
    }
}

#[tokio::test]
async fn test_tasks_move_malformed_body() {
    let temp_dir = TempDir::new().unwrap();
    let base = spawn_app(config(UNREACHABLE, temp_dir.path())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/tasks/move", base))
        .json(&json!({ "draggableId": "1" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
