//! Shared types
//!
//! Platform-agnostic types used by the backend adapters, the reconciliation
//! store and the views.

pub mod config;
pub mod error;
pub mod user;
pub mod validation;

pub use error::SharedError;
pub use user::{Origin, UserFields, UserId, UserRecord, WireUser};
