//! Route tests for the resource methods.
//!
//! Uses wiremock to check that each method hits the right verb, path, query
//! and body, and that responses come back as decoded JSON.

use liquidplanner::{ClientConfig, LiquidPlannerClient, Query, ThrottlePolicy};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WORKSPACE: &str = "/api/workspaces/12345";

fn client_for(server: &MockServer) -> LiquidPlannerClient {
    let config = ClientConfig::default()
        .api_url(format!("{}/api", server.uri()))
        .throttle(ThrottlePolicy::disabled());
    LiquidPlannerClient::with_config(12345, "you@example.com", "yourLPpassword", config).unwrap()
}

async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(basic_auth("you@example.com", "yourLPpassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// =============================================================================
// Tasks
// =============================================================================

#[tokio::test]
async fn test_tasks_get_single() {
    let server = MockServer::start().await;
    mount_get(&server, &format!("{WORKSPACE}/tasks/42"), json!({"id": 42, "type": "Task"})).await;

    let task = client_for(&server).tasks(Some(42), &Query::new()).await.unwrap();
    assert_eq!(task["id"], 42);
}

#[tokio::test]
async fn test_tasks_list_with_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{WORKSPACE}/tasks")))
        .and(query_param("limit", "10"))
        .and(query_param("filter[]", "is_done is false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server)
        .tasks(None, &Query::new().limit(10).filter("is_done is false"))
        .await
        .unwrap();
    assert_eq!(tasks.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_tasks_create_wraps_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{WORKSPACE}/tasks")))
        .and(header("content-type", "application/json"))
        .and(basic_auth("you@example.com", "yourLPpassword"))
        .and(body_json(json!({
            "task": {
                "name": "My LP ticket",
                "parent_id": 123456,
                "description": "Description of my LP ticket"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 987,
            "type": "Task",
            "name": "My LP ticket"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .tasks_create(&json!({
            "name": "My LP ticket",
            "parent_id": 123456,
            "description": "Description of my LP ticket"
        }))
        .await
        .unwrap();
    assert_eq!(response["id"], 987);
}

#[tokio::test]
async fn test_tasks_delete_returns_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{WORKSPACE}/tasks/42")))
        .and(basic_auth("you@example.com", "yourLPpassword"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":42,"type":"Task"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server).tasks_delete(42).await.unwrap();
    assert_eq!(raw, r#"{"id":42,"type":"Task"}"#);
}

#[tokio::test]
async fn test_tasks_delete_non_json_body_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{WORKSPACE}/tasks/42")))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;

    let raw = client_for(&server).tasks_delete(42).await.unwrap();
    assert_eq!(raw, "deleted");
}

#[tokio::test]
async fn test_tasks_track_time_sends_fields_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{WORKSPACE}/tasks/123456/track_time")))
        .and(body_json(json!({"work": "2", "activity_id": "12345"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 123456, "work": 2.0})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .tasks_track_time(123456, &json!({"work": "2", "activity_id": "12345"}))
        .await
        .unwrap();
    assert_eq!(response["work"], 2.0);
}

#[tokio::test]
async fn test_tasks_comments_create() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{WORKSPACE}/tasks/7/comments")))
        .and(body_json(json!({"comment": {"comment": "Looks good"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 300, "comment": "Looks good"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .tasks_comments_create(7, &json!({"comment": "Looks good"}))
        .await
        .unwrap();
    assert_eq!(response["id"], 300);
}

#[tokio::test]
async fn test_treeitems_estimates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{WORKSPACE}/treeitems/55/estimates")))
        .and(body_json(json!({"low": 1.5, "high": 4.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"low": 1.5, "high": 4.0})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).treeitems_estimates(55, 1.5, 4.0).await.unwrap();
    assert_eq!(response["high"], 4.0);
}

// =============================================================================
// Clients, projects, members, activities
// =============================================================================

#[tokio::test]
async fn test_clients_list_and_get() {
    let server = MockServer::start().await;
    mount_get(&server, &format!("{WORKSPACE}/clients"), json!([{"id": 3}])).await;
    mount_get(&server, &format!("{WORKSPACE}/clients/3"), json!({"id": 3, "name": "Acme"})).await;

    let client = client_for(&server);
    assert!(client.clients(None).await.unwrap().is_array());
    assert_eq!(client.clients(Some(3)).await.unwrap()["name"], "Acme");
}

#[tokio::test]
async fn test_clients_create_wraps_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{WORKSPACE}/clients")))
        .and(body_json(json!({"client": {"name": "Acme"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3, "name": "Acme"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .clients_create(&json!({"name": "Acme"}))
        .await
        .unwrap();
    assert_eq!(response["id"], 3);
}

#[tokio::test]
async fn test_clients_comments_routes() {
    let server = MockServer::start().await;
    mount_get(&server, &format!("{WORKSPACE}/clients/3/comments"), json!([])).await;
    mount_get(&server, &format!("{WORKSPACE}/clients/3/comments/9"), json!({"id": 9})).await;

    Mock::given(method("DELETE"))
        .and(path(format!("{WORKSPACE}/clients/3/comments/9")))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.clients_comments(3, None).await.unwrap(), json!([]));
    assert_eq!(client.clients_comments(3, Some(9)).await.unwrap()["id"], 9);
    assert_eq!(client.clients_comments_delete(3, 9).await.unwrap(), "");
}

#[tokio::test]
async fn test_projects_routes() {
    let server = MockServer::start().await;
    mount_get(&server, &format!("{WORKSPACE}/projects"), json!([{"id": 88}])).await;
    mount_get(&server, &format!("{WORKSPACE}/projects/88"), json!({"id": 88})).await;

    Mock::given(method("POST"))
        .and(path(format!("{WORKSPACE}/projects")))
        .and(body_json(json!({"project": {"name": "Launch", "client_id": 3}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 89})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.projects(None).await.unwrap()[0]["id"], 88);
    assert_eq!(client.projects(Some(88)).await.unwrap()["id"], 88);
    let created = client
        .projects_create(&json!({"name": "Launch", "client_id": 3}))
        .await
        .unwrap();
    assert_eq!(created["id"], 89);
}

#[tokio::test]
async fn test_members_and_activities() {
    let server = MockServer::start().await;
    mount_get(&server, &format!("{WORKSPACE}/members"), json!([{"id": 1}])).await;
    mount_get(&server, &format!("{WORKSPACE}/members/1"), json!({"id": 1})).await;
    mount_get(&server, &format!("{WORKSPACE}/activities"), json!([{"id": 12345}])).await;
    mount_get(&server, &format!("{WORKSPACE}/activities/12345"), json!({"id": 12345})).await;

    let client = client_for(&server);
    assert!(client.members(None).await.unwrap().is_array());
    assert_eq!(client.members(Some(1)).await.unwrap()["id"], 1);
    assert!(client.activities(None).await.unwrap().is_array());
    assert_eq!(client.activities(Some(12345)).await.unwrap()["id"], 12345);
}

// =============================================================================
// Account, workspace, timesheets
// =============================================================================

#[tokio::test]
async fn test_account_is_not_workspace_scoped() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/account", json!({"id": 77, "user_name": "you"})).await;

    let account = client_for(&server).account().await.unwrap();
    assert_eq!(account["user_name"], "you");
}

#[tokio::test]
async fn test_workspace_info() {
    let server = MockServer::start().await;
    mount_get(&server, WORKSPACE, json!({"id": 12345, "name": "Acme Workspace"})).await;

    let workspace = client_for(&server).workspace().await.unwrap();
    assert_eq!(workspace["name"], "Acme Workspace");
}

#[tokio::test]
async fn test_timesheets_with_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{WORKSPACE}/timesheets")))
        .and(query_param("member_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let sheets = client_for(&server)
        .timesheets(&Query::new().param("member_id", 1))
        .await
        .unwrap();
    assert_eq!(sheets, json!([]));
}

#[tokio::test]
async fn test_timesheet_entries_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{WORKSPACE}/timesheet_entries")))
        .and(query_param("from_date", "03/01/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, &format!("{WORKSPACE}/timesheets/4/timesheet_entries"), json!([])).await;

    let client = client_for(&server);
    let from = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let all = client
        .timesheet_entries(None, &Query::new().from_date(from))
        .await
        .unwrap();
    assert_eq!(all[0]["id"], 1);

    let scoped = client.timesheet_entries(Some(4), &Query::new()).await.unwrap();
    assert_eq!(scoped, json!([]));
}
