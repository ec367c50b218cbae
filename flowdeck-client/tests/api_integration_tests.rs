//! Integration tests for the client operations.
//!
//! These use wiremock to simulate server variants end to end, reqwest
//! transport included. Requests the mock server does not recognize get a
//! 404, which is exactly what drives the base-path probing.

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flowdeck_client::{Client, ClientError, ConnectionConfig, Scheme};

/// Build a config pointing at the mock server.
fn config_for(server: &MockServer) -> ConnectionConfig {
    let uri = server.uri();
    let address = uri.strip_prefix("http://").expect("mock server uri is http");
    let (host, port) = address.split_once(':').expect("mock server uri has a port");
    ConnectionConfig::new(host)
        .with_scheme(Scheme::Http)
        .with_port(port)
}

#[tokio::test]
async fn list_workflows_under_rest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Sync contacts", "active": true },
            { "id": 2, "name": "Nightly report", "active": false }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let workflows = client.list_workflows().await.unwrap();

    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[0].id, 1);
    assert_eq!(workflows[0].name.as_deref(), Some("Sync contacts"));
    assert_eq!(workflows[1].active, Some(false));
}

#[tokio::test]
async fn probe_falls_back_to_api_v1() {
    let mock_server = MockServer::start().await;

    // Nothing mounted under /rest, so that candidate 404s.
    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 7 }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let workflows = client.list_workflows().await.unwrap();

    assert_eq!(workflows.len(), 1);
    assert_eq!(workflows[0].id, 7);
}

#[tokio::test]
async fn authentication_failure_stops_probing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "unauthorized"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // A later candidate would succeed, but must never be reached.
    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let result = client.list_workflows().await;

    assert!(matches!(result, Err(ClientError::AuthenticationRequired)));
}

#[tokio::test]
async fn api_key_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .and(header("X-N8N-API-KEY", "my-secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server).with_api_key("my-secret-key");
    let client = Client::new(config).unwrap();

    assert!(client.list_workflows().await.is_ok());
}

#[tokio::test]
async fn blank_api_key_is_not_sent() {
    let mock_server = MockServer::start().await;

    // Guard: any request carrying the key header is a failure.
    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .and(header_exists("X-N8N-API-KEY"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server).with_api_key("   ");
    let client = Client::new(config).unwrap();

    assert!(client.list_workflows().await.is_ok());
}

#[tokio::test]
async fn enveloped_workflow_listing_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 4, "name": "Webhook relay", "active": true }],
            "count": 1
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let workflows = client.list_workflows().await.unwrap();

    assert_eq!(workflows.len(), 1);
    assert_eq!(workflows[0].name.as_deref(), Some("Webhook relay"));
}

#[tokio::test]
async fn activate_uses_dedicated_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/workflows/3/activate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();

    assert!(client.set_workflow_active(3, true).await.is_ok());
}

#[tokio::test]
async fn deactivate_falls_back_to_put_update() {
    let mock_server = MockServer::start().await;

    // No deactivate endpoint anywhere; the probe exhausts its candidates
    // and the client updates the workflow with an active flag instead.
    Mock::given(method("PUT"))
        .and(path("/rest/workflows/3"))
        .and(body_json(json!({ "active": false })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();

    assert!(client.set_workflow_active(3, false).await.is_ok());
}

#[tokio::test]
async fn scoped_executions_fall_back_to_query_form() {
    let mock_server = MockServer::start().await;

    // workflows/9/executions is not mounted, so the scoped attempt 404s
    // across every base path before the query form answers.
    Mock::given(method("GET"))
        .and(path("/rest/executions"))
        .and(query_param("workflowId", "9"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "executions": [
                {
                    "id": "100",
                    "workflowId": 9,
                    "status": "success",
                    "startedAt": "2024-05-01T10:00:00.000Z",
                    "stoppedAt": "2024-05-01T10:00:03.000Z"
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let executions = client.list_executions(Some(9), 10).await.unwrap();

    assert_eq!(executions.len(), 1);
    assert_eq!(executions[0].id, "100");
    assert_eq!(executions[0].workflow_id, Some(9));
    assert_eq!(executions[0].status.as_deref(), Some("success"));
}

#[tokio::test]
async fn executions_normalize_integer_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/executions"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 31, "workflowId": 2, "status": "error" },
            { "id": "32", "workflowId": 2, "status": "success" }
        ])))
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let executions = client.list_executions(None, 5).await.unwrap();

    assert_eq!(executions.len(), 2);
    assert_eq!(executions[0].id, "31");
    assert_eq!(executions[1].id, "32");
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/workflows"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = Client::new(config_for(&mock_server)).unwrap();
    let result = client.list_workflows().await;

    match result {
        Err(ClientError::Server { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("internal error"));
        }
        other => panic!("expected server error, got {:?}", other),
    }
}
