//! Mock server helpers for integration tests
//!
//! Each backend gets its own wiremock server so requests can be counted
//! per backend.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use userdesk::egui_app::{DemoApiClient, RecordStoreClient, UserStore};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Mock servers standing in for both backends
pub struct Backends {
    pub demo: MockServer,
    pub records: MockServer,
}

impl Backends {
    pub async fn start() -> Self {
        Self {
            demo: MockServer::start().await,
            records: MockServer::start().await,
        }
    }

    /// Serve `GET /users` on both backends
    pub async fn serve_lists(&self, demo: Value, records: Value) {
        mount_list(&self.demo, demo).await;
        mount_list(&self.records, records).await;
    }

    pub fn store(&self) -> UserStore {
        let demo = DemoApiClient::with_base_url(&self.demo.uri(), TEST_TIMEOUT)
            .expect("demo client");
        let records = RecordStoreClient::with_base_url(&self.records.uri(), TEST_TIMEOUT)
            .expect("record store client");
        UserStore::new(Arc::new(demo), Arc::new(records))
    }

    /// Requests other than the initial list fetch, per backend
    pub async fn mutations(server: &MockServer) -> Vec<String> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| !(request.method.as_str() == "GET" && request.url.path() == "/users"))
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }
}

pub async fn mount_list(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
