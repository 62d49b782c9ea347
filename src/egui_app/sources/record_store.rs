//! Record Store Client
//!
//! Client for the local writable record store. This is the only backend
//! that receives `POST`, `PUT` and `DELETE` requests.

use async_trait::async_trait;
use std::time::Duration;

use super::http::JsonHttp;
use super::{SourceError, WritableSource};
use crate::egui_app::config::Config;
use crate::shared::user::{UserFields, UserId, UserRecord, WireUser};

/// Record store client
#[derive(Debug, Clone)]
pub struct RecordStoreClient {
    http: JsonHttp,
}

impl RecordStoreClient {
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        Self::with_base_url(config.record_store_url(), config.request_timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            http: JsonHttp::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl WritableSource for RecordStoreClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.http.fetch_users().await
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, SourceError> {
        self.http.fetch_user(id).await
    }

    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord, SourceError> {
        let url = self.http.users_url()?;
        tracing::debug!(%url, "POST user");
        let response = self
            .http
            .send(self.http.client().post(url).json(fields))
            .await?;
        let created: WireUser = JsonHttp::decode(response).await?;
        Ok(UserRecord::created(created))
    }

    async fn replace_user(&self, record: &UserRecord) -> Result<(), SourceError> {
        let url = self.http.user_url(&record.id)?;
        tracing::debug!(%url, "PUT user");
        self.http
            .send(self.http.client().put(url).json(&record.to_wire()))
            .await?;
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), SourceError> {
        let url = self.http.user_url(id)?;
        tracing::debug!(%url, "DELETE user");
        self.http.send(self.http.client().delete(url)).await?;
        Ok(())
    }
}
