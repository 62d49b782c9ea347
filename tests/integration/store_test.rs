//! Store integration tests
//!
//! Runs the reconciliation store end to end against mock backends and checks
//! which requests actually reach each one.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{demo_user_json, demo_users, local_user_json, mount_list, Backends};
use userdesk::egui_app::store::{LoadState, Operation, StoreError, StoreEvent};
use userdesk::egui_app::SourceKind;
use userdesk::shared::{UserFields, UserId};

fn fields(name: &str) -> UserFields {
    UserFields::new(name, "someone@example.com", "5551234567")
}

#[tokio::test]
async fn test_load_merges_both_sources() {
    let backends = Backends::start().await;
    backends
        .serve_lists(demo_users(10), json!([local_user_json(json!(11), "Ada")]))
        .await;
    let mut store = backends.store();

    assert_eq!(store.load().await, LoadState::Complete);

    assert_eq!(store.users().len(), 11);
    assert_eq!(store.is_read_only(&UserId::Int(3)), Some(true));
    assert_eq!(store.is_read_only(&UserId::Int(11)), Some(false));
}

#[tokio::test]
async fn test_shared_id_is_listed_once() {
    let backends = Backends::start().await;
    backends
        .serve_lists(
            json!([demo_user_json(1, "Leanne")]),
            json!([local_user_json(json!(1), "Local One"), local_user_json(json!(2), "Two")]),
        )
        .await;
    let mut store = backends.store();

    store.load().await;

    let ids: Vec<_> = store.users().iter().map(|u| u.id.clone()).collect();
    assert_eq!(ids.iter().filter(|id| **id == UserId::Int(1)).count(), 1);
    assert_eq!(store.users().len(), 2);
}

#[tokio::test]
async fn test_demo_records_cannot_be_mutated() {
    let backends = Backends::start().await;
    backends.serve_lists(demo_users(2), json!([])).await;
    let mut store = backends.store();
    store.load().await;
    let events = store.subscribe();

    assert_matches!(
        store.update(&UserId::Int(1), fields("Renamed")).await,
        Err(StoreError::NotPermitted { operation: Operation::Update, .. })
    );
    assert_matches!(
        store.delete(&UserId::Int(2)).await,
        Err(StoreError::NotPermitted { operation: Operation::Delete, .. })
    );

    assert_eq!(store.get(&UserId::Int(1)).map(|u| u.name.as_str()), Some("Demo User 1"));
    assert!(Backends::mutations(&backends.demo).await.is_empty());
    assert!(Backends::mutations(&backends.records).await.is_empty());

    let messages: Vec<_> = events
        .try_iter()
        .filter_map(|event| match event {
            StoreEvent::Notice(notice) => Some(notice.message),
            StoreEvent::Changed { .. } => None,
        })
        .collect();
    assert_eq!(
        messages,
        vec![
            "You cannot edit users from the demo API!",
            "You cannot delete users from the demo API!",
        ]
    );
}

#[tokio::test]
async fn test_writable_record_update_and_delete() {
    let backends = Backends::start().await;
    backends
        .serve_lists(demo_users(1), json!([local_user_json(json!(11), "Ada")]))
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&backends.records)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/11"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backends.records)
        .await;
    let mut store = backends.store();
    store.load().await;

    let updated = crate::assert_ok!(store.update(&UserId::Int(11), fields("Ada Byron")).await);
    assert_eq!(updated.name, "Ada Byron");
    assert_eq!(store.get(&UserId::Int(11)).map(|u| u.name.as_str()), Some("Ada Byron"));

    assert_eq!(crate::assert_ok!(store.delete(&UserId::Int(11)).await), UserId::Int(11));
    assert!(store.get(&UserId::Int(11)).is_none());
    assert_eq!(
        Backends::mutations(&backends.records).await,
        vec!["PUT /users/11".to_string(), "DELETE /users/11".to_string()]
    );
}

#[tokio::test]
async fn test_create_appends_to_collection() {
    let backends = Backends::start().await;
    backends.serve_lists(demo_users(2), json!([])).await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f3a9",
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "5559876543"
        })))
        .mount(&backends.records)
        .await;
    let mut store = backends.store();
    store.load().await;

    let created = crate::assert_ok!(
        store
            .create(UserFields::new("Grace Hopper", "grace@example.com", "5559876543"))
            .await
    );

    assert_eq!(created.id, UserId::Text("f3a9".to_string()));
    assert_eq!(store.users().last().map(|u| u.id.clone()), Some(created.id));
    assert_eq!(store.users().len(), 3);
}

#[tokio::test]
async fn test_failed_delete_keeps_record() {
    let backends = Backends::start().await;
    backends
        .serve_lists(json!([]), json!([local_user_json(json!(5), "Five")]))
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&backends.records)
        .await;
    let mut store = backends.store();
    store.load().await;

    assert_matches!(
        store.delete(&UserId::Int(5)).await,
        Err(StoreError::Backend { operation: Operation::Delete, .. })
    );
    assert!(store.get(&UserId::Int(5)).is_some());
}

#[tokio::test]
async fn test_lookup_falls_back_to_record_store() {
    let backends = Backends::start().await;
    backends.serve_lists(demo_users(1), json!([])).await;
    Mock::given(method("GET"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_user_json(json!(42), "Answer")))
        .mount(&backends.records)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/43"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backends.records)
        .await;
    let mut store = backends.store();
    store.load().await;

    // in memory: no request
    crate::assert_ok!(store.find(&UserId::Int(1)).await);
    assert!(Backends::mutations(&backends.records).await.is_empty());

    let found = crate::assert_ok!(store.find(&UserId::Int(42)).await);
    assert_eq!(found.name, "Answer");
    assert!(store.get(&UserId::Int(42)).is_none());

    let missing = store.find(&UserId::Int(43)).await;
    assert_matches!(missing, Err(StoreError::NotFound { id }) if id == UserId::Int(43));
    crate::assert_contains!(
        StoreError::NotFound { id: UserId::Int(43) }.to_string(),
        "was not found"
    );

    // the demo API is never asked for single users
    assert!(Backends::mutations(&backends.demo).await.is_empty());
}

#[tokio::test]
async fn test_unreachable_source_gives_partial_load() {
    let backends = Backends::start().await;
    mount_list(&backends.records, json!([local_user_json(json!(11), "Ada")])).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&backends.demo)
        .await;
    let mut store = backends.store();

    let state = store.load().await;

    assert_eq!(state, LoadState::Partial { failed: vec![SourceKind::DemoApi] });
    assert_eq!(store.users().len(), 1);
    // the record store side stays usable
    Mock::given(method("PUT"))
        .and(path("/users/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&backends.records)
        .await;
    crate::assert_ok!(store.update(&UserId::Int(11), fields("Still works")).await);
}
