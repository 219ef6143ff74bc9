//! Integration tests for the resource method surface.
//!
//! These tests verify that resource methods post the expected GraphQL
//! operation string, by matching the exact request body against a mock
//! server.

use monday_api::query::select;
use monday_api::{ApiToken, Client, EndpointUrl, MondayConfig, QueryArgs};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> Client {
    let config = MondayConfig::builder()
        .token(ApiToken::new("test-token").unwrap())
        .endpoint(EndpointUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(config)
}

/// Mounts a mock that expects exactly the given query string.
async fn expect_query(server: &MockServer, query: &str) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({ "query": query })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_boards_query_posts_expected_operation() {
    let server = MockServer::start().await;
    expect_query(
        &server,
        "query { boards (ids: [1234], limit: 1) { id name description } }",
    )
    .await;

    let client = create_test_client(&server);
    let args = QueryArgs::new().arg("ids", vec![1234]).arg("limit", 1);
    let response = client.boards().query(args, None).await.unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_boards_query_with_custom_selection() {
    let server = MockServer::start().await;
    expect_query(&server, "query { boards { id } }").await;

    let client = create_test_client(&server);
    let response = client
        .boards()
        .query(QueryArgs::new(), Some(select(&["id"])))
        .await
        .unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_account_query_has_no_arguments() {
    let server = MockServer::start().await;
    expect_query(&server, "query { account { id name } }").await;

    let client = create_test_client(&server);
    let response = client.account().query(None).await.unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_create_item_quotes_multi_word_name() {
    let server = MockServer::start().await;
    expect_query(
        &server,
        "mutation { create_item (board_id: 42, item_name: \"my new item\") { id name created_at } }",
    )
    .await;

    let client = create_test_client(&server);
    let args = QueryArgs::new()
        .arg("board_id", 42)
        .arg("item_name", "my new item");
    let response = client.items().create(args, None).await.unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_activity_logs_nest_under_boards_with_inline_args() {
    let server = MockServer::start().await;
    expect_query(
        &server,
        "query { boards (ids: [1234]) { activity_logs (limit: 5) { id event data } } }",
    )
    .await;

    let client = create_test_client(&server);
    let args = QueryArgs::new().arg("limit", 5);
    let response = client
        .activity_logs()
        .query(vec![1234], args, None)
        .await
        .unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_update_board_omits_selection() {
    let server = MockServer::start().await;
    expect_query(
        &server,
        "mutation { update_board (board_id: 42, board_attribute: name, new_value: renamed) }",
    )
    .await;

    let client = create_test_client(&server);
    let args = QueryArgs::new()
        .arg("board_id", 42)
        .arg("board_attribute", "name")
        .arg("new_value", "renamed");
    let response = client.boards().update(args).await.unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_like_update_posts_id_argument() {
    let server = MockServer::start().await;
    expect_query(&server, "mutation { like_update (update_id: 99) { id } }").await;

    let client = create_test_client(&server);
    let response = client.updates().like(99, None).await.unwrap();

    assert!(response.success());
}

#[tokio::test]
async fn test_workspace_delete_uses_default_id_selection() {
    let server = MockServer::start().await;
    expect_query(&server, "mutation { delete_workspace (workspace_id: 7) { id } }").await;

    let client = create_test_client(&server);
    let response = client.workspaces().delete(7, None).await.unwrap();

    assert!(response.success());
}
