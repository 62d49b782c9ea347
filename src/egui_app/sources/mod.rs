//! Backend Source Adapters
//!
//! The two black-box REST backends the reconciliation store talks to:
//!
//! - **Demo API** ([`ReadOnlySource`]) - public user directory. Only `GET`
//!   requests are ever sent to it.
//! - **Record store** ([`WritableSource`]) - local JSON record store owning
//!   every record this client may create, replace or delete.
//!
//! Both speak the same JSON record shape (see [`crate::shared::user`]).
//! The traits exist so the store can be driven by in-memory fakes in tests.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::shared::user::{UserFields, UserId, UserRecord};

mod http;
pub mod demo_api;
pub mod record_store;

pub use demo_api::DemoApiClient;
pub use record_store::RecordStoreClient;

/// Which backend a fetch came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    DemoApi,
    RecordStore,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::DemoApi => write!(f, "the demo API"),
            SourceKind::RecordStore => write!(f, "the record store"),
        }
    }
}

/// Adapter-level failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("not found")]
    NotFound,
    #[error("request failed: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound)
    }
}

/// Read-only user source
#[async_trait]
pub trait ReadOnlySource: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<UserRecord>, SourceError>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, SourceError>;
}

/// Writable user source
#[async_trait]
pub trait WritableSource: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<UserRecord>, SourceError>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, SourceError>;

    /// `POST /users`; the backend assigns the identifier
    async fn create_user(&self, fields: &UserFields) -> Result<UserRecord, SourceError>;

    /// `PUT /users/{id}` with the full record
    async fn replace_user(&self, record: &UserRecord) -> Result<(), SourceError>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: &UserId) -> Result<(), SourceError>;
}
