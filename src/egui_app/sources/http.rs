//! JSON-over-HTTP plumbing shared by both source clients.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::SourceError;
use crate::shared::user::{UserId, UserRecord, WireUser};

#[derive(Debug, Clone)]
pub(crate) struct JsonHttp {
    client: Client,
    base: Url,
}

impl JsonHttp {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base = Url::parse(base_url)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// `{base}/users`
    pub(crate) fn users_url(&self) -> Result<Url, SourceError> {
        self.endpoint(&["users"])
    }

    /// `{base}/users/{id}`, with the id percent-encoded as one path segment
    pub(crate) fn user_url(&self, id: &UserId) -> Result<Url, SourceError> {
        let id = id.to_string();
        self.endpoint(&["users", &id])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, mapping transport errors and non-2xx statuses
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, SourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() == 404 {
            return Err(SourceError::NotFound);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(SourceError::Status {
            status: status.as_u16(),
            body,
        })
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    pub(crate) async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        let url = self.users_url()?;
        tracing::debug!(%url, "GET users");
        let response = self.send(self.client.get(url)).await?;
        let users: Vec<WireUser> = Self::decode(response).await?;
        Ok(users.into_iter().map(UserRecord::from_wire).collect())
    }

    pub(crate) async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, SourceError> {
        let url = self.user_url(id)?;
        tracing::debug!(%url, "GET user");
        let response = self.send(self.client.get(url)).await?;
        let user: WireUser = Self::decode(response).await?;
        Ok(UserRecord::from_wire(user))
    }
}
