//! Backend client integration tests
//!
//! Verifies both clients against mock HTTP servers: list and get decoding,
//! status mapping, and the bodies sent for create and replace.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{demo_user_json, demo_users, local_user_json, TEST_TIMEOUT};
use userdesk::egui_app::{
    DemoApiClient, ReadOnlySource, RecordStoreClient, SourceError, WritableSource,
};
use userdesk::shared::{Origin, UserFields, UserId};

async fn demo_client(server: &MockServer) -> DemoApiClient {
    crate::assert_ok!(DemoApiClient::with_base_url(&server.uri(), TEST_TIMEOUT))
}

async fn record_client(server: &MockServer) -> RecordStoreClient {
    crate::assert_ok!(RecordStoreClient::with_base_url(&server.uri(), TEST_TIMEOUT))
}

// =============================================================================
// Demo API
// =============================================================================

#[tokio::test]
async fn test_demo_list_classifies_read_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_users(3)))
        .mount(&server)
        .await;

    let users = crate::assert_ok!(demo_client(&server).await.list_users().await);

    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|u| u.origin() == Origin::ReadOnly));
    assert_eq!(users[0].id, UserId::Int(1));
    assert_eq!(users[0].username(), Some("user1"));
}

#[tokio::test]
async fn test_demo_get_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_user_json(4, "Patricia")))
        .mount(&server)
        .await;

    let user = crate::assert_ok!(demo_client(&server).await.get_user(&UserId::Int(4)).await);

    assert_eq!(user.name, "Patricia");
    assert!(user.is_read_only());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = demo_client(&server).await.list_users().await;

    crate::assert_err!(result, SourceError::Status { status: 500, .. });
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = demo_client(&server).await.list_users().await;

    crate::assert_err!(result, SourceError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Nothing listens on the discard port
    let client = crate::assert_ok!(DemoApiClient::with_base_url("http://127.0.0.1:9", TEST_TIMEOUT));

    crate::assert_err!(client.list_users().await, SourceError::Transport(_));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    crate::assert_err!(
        DemoApiClient::with_base_url("not a url", TEST_TIMEOUT),
        SourceError::InvalidUrl(_)
    );
}

// =============================================================================
// Record store
// =============================================================================

#[tokio::test]
async fn test_record_list_is_writable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            local_user_json(json!(11), "Ada"),
            local_user_json(json!("a1b2"), "Grace"),
        ])))
        .mount(&server)
        .await;

    let users = crate::assert_ok!(record_client(&server).await.list_users().await);

    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| !u.is_read_only()));
    assert_eq!(users[1].id, UserId::Text("a1b2".to_string()));
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = record_client(&server).await.get_user(&UserId::Int(99)).await;

    crate::assert_err!(result, SourceError::NotFound);
}

#[tokio::test]
async fn test_create_posts_fields_and_returns_writable_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "5551234567"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "5551234567"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fields = UserFields::new("Ada Lovelace", "ada@example.com", "5551234567");
    let created = crate::assert_ok!(record_client(&server).await.create_user(&fields).await);

    assert_eq!(created.id, UserId::Int(12));
    assert_eq!(created.origin(), Origin::Writable);
}

#[tokio::test]
async fn test_replace_puts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Old",
            "email": "old@example.com",
            "phone": "5550000000",
            "notes": "kept"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/7"))
        .and(body_json(json!({
            "id": 7,
            "name": "New Name",
            "email": "new@example.com",
            "phone": "5551111111",
            "notes": "kept"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = record_client(&server).await;
    let current = crate::assert_ok!(client.get_user(&UserId::Int(7)).await);
    let candidate =
        current.with_fields(UserFields::new("New Name", "new@example.com", "5551111111"));

    crate::assert_ok!(client.replace_user(&candidate).await);
}

#[tokio::test]
async fn test_delete_sends_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/abc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = record_client(&server)
        .await
        .delete_user(&UserId::Text("abc".to_string()))
        .await;

    crate::assert_ok!(result);
}
