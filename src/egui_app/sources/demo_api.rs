//! Demo API Client
//!
//! Read-only client for the public demo user directory.

use async_trait::async_trait;
use std::time::Duration;

use super::http::JsonHttp;
use super::{ReadOnlySource, SourceError};
use crate::egui_app::config::Config;
use crate::shared::user::{UserId, UserRecord};

/// Demo API client
#[derive(Debug, Clone)]
pub struct DemoApiClient {
    http: JsonHttp,
}

impl DemoApiClient {
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        Self::with_base_url(config.demo_api_url(), config.request_timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            http: JsonHttp::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl ReadOnlySource for DemoApiClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.http.fetch_users().await
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, SourceError> {
        self.http.fetch_user(id).await
    }
}
