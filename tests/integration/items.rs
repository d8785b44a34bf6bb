//! Items API flows across several operations.

use super::common::{backend, APP_ID};
use serde_json::json;
use ucode_sdk::items::{ErrorKind, Status};
use ucode_sdk::{Argument, Request};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// House lifecycle
// ============================================================================

#[tokio::test]
async fn test_house_lifecycle() {
    let (server, client) = backend().await;

    Mock::given(method("POST"))
        .and(path("/v2/items/houses"))
        .and(header("X-API-KEY", APP_ID))
        .and(body_json(json!({"data": {"name": "house", "price": 15000, "room_count": 5}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "CREATED",
            "data": {"table_slug": "houses", "data": {"data": {
                "guid": "h1", "name": "house", "price": 15000, "room_count": 5
            }}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/items/houses"))
        .and(body_json(json!({"data": {"guid": "h1", "price": 17000}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {"table_slug": "houses", "data": {"guid": "h1", "price": 17000}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/items/houses/h1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {"data": {"response": {"guid": "h1", "price": 17000, "room_count": 5}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/items/houses/h1"))
        .and(body_json(json!({"data": {}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // Table slug comes from the configured default.
    let (created, response) = client
        .create_object(&Argument::default().with_request(
            Request::new()
                .with("name", "house")
                .with("price", 15000)
                .with("room_count", 5),
        ))
        .await
        .expect("create should succeed");
    assert_eq!(response.status, Status::Done);
    assert_eq!(created.object()["room_count"], 5);

    let guid = created.object()["guid"].as_str().unwrap().to_string();

    let (updated, _) = client
        .update_object(&Argument::default().with_request(Request::guid(&guid).with("price", 17000)))
        .await
        .expect("update should succeed");
    assert_eq!(updated.object()["price"], 17000);

    let (single, _) = client
        .get_single(&Argument::default().with_request(Request::guid(&guid)))
        .await
        .expect("get single should succeed");
    assert_eq!(single.object()["price"], 17000);

    let response = client
        .delete(&Argument::default().with_request(Request::guid(&guid)))
        .await
        .expect("delete should succeed");
    assert!(response.is_done());
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_get_list_with_invalid_pagination() {
    let (server, client) = backend().await;

    Mock::given(method("POST"))
        .and(path("/v2/object/get-list/houses"))
        .and(query_param("from-ofs", "false"))
        .and(body_json(json!({"data": {"offset": 0, "limit": 10}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {"data": {"count": 1, "response": [{"guid": "h1"}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (list, response) = client
        .get_list(&Argument::new("houses").paginate(-1, -1))
        .await
        .expect("get list should succeed");

    assert!(response.is_done());
    assert_eq!(list.objects().len(), 1);
}

#[tokio::test]
async fn test_config_change_applies_to_next_call() {
    let (server, mut client) = backend().await;

    Mock::given(method("GET"))
        .and(path("/v1/object-slim/rooms/r1"))
        .and(header("X-API-KEY", "P-second-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"data": {"response": {"guid": "r1"}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    client.config_mut().set_app_id("P-second-app");
    client.config_mut().set_table_slug("rooms");

    let (single, _) = client
        .get_single_slim(&Argument::default().with_request(Request::guid("r1")))
        .await
        .expect("slim get should succeed");
    assert_eq!(single.object()["guid"], "r1");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_update_missing_table_reports_error_wrapper() {
    let (server, client) = backend().await;

    Mock::given(method("PUT"))
        .and(path("/v2/items/no_such_table"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "NOT_FOUND",
            "description": "table not found",
            "data": "no_such_table"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .update_object(&Argument::new("no_such_table").with_request(Request::guid("h1")))
        .await
        .unwrap_err();

    assert_eq!(err.response.status, Status::Error);
    assert!(matches!(err.kind(), ErrorKind::Deserialization(_)));
    assert!(err.response.data["description"]
        .as_str()
        .unwrap()
        .contains("table not found"));
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_unreachable_backend() {
    super::common::init_tracing();
    let client = ucode_sdk::ItemsClient::new(ucode_sdk::Config::new("http://127.0.0.1:9", APP_ID))
        .expect("Failed to create items client");

    let err = client
        .create_object(&Argument::new("houses").with_request(Request::new().with("name", "house")))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.response.status, Status::Error);
}
