//! Store Error Types
//!
//! Every failure the store can report, one variant per kind:
//!
//! - `Fetch` - an initial-load source was unreachable or erroring
//! - `NotPermitted` - a mutation targeted a read-only record
//! - `Backend` - the record store rejected a permitted operation
//! - `NotFound` - the identifier is neither in memory nor in the record store
//!
//! None of these are fatal; the store stays usable after any of them.

use std::fmt;
use thiserror::Error;

use crate::egui_app::sources::{SourceError, SourceKind};
use crate::shared::user::UserId;

/// Operation that produced a store error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    Lookup,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Load => write!(f, "load"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
            Operation::Lookup => write!(f, "look up"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to fetch users from {source_kind}: {source}")]
    Fetch {
        source_kind: SourceKind,
        #[source]
        source: SourceError,
    },

    #[error("user {id} comes from the demo API; {operation} is not permitted")]
    NotPermitted { id: UserId, operation: Operation },

    #[error("failed to {operation} user: {source}")]
    Backend {
        operation: Operation,
        #[source]
        source: SourceError,
    },

    #[error("user {id} was not found")]
    NotFound { id: UserId },
}

impl StoreError {
    /// Whether the store refused the operation without calling a backend
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::NotPermitted { .. } | StoreError::NotFound { .. })
    }
}
