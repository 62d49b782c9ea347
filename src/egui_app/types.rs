/**
 * Shared Types Module
 *
 * View states and form buffers used by the egui views.
 */

use std::collections::BTreeMap;

use crate::shared::user::{UserFields, UserId, UserRecord};
use crate::shared::validation::validate_fields;

/// Current app view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    /// Searchable user table
    List,
    /// Edit form for one user
    Detail(UserId),
    /// New user form
    AddUser,
}

/// Subject of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Waiting for the record store
    Loading(UserId),
    /// `listed` is false when the record came from a direct record store
    /// lookup and is not part of the merged collection
    Ready { record: UserRecord, listed: bool },
}

impl DetailState {
    pub fn id(&self) -> &UserId {
        match self {
            DetailState::Loading(id) => id,
            DetailState::Ready { record, .. } => &record.id,
        }
    }

    /// Only listed, writable records can be submitted for update
    pub fn is_editable(&self) -> bool {
        matches!(self, DetailState::Ready { record, listed: true } if !record.is_read_only())
    }
}

/// Text buffers and per-field errors for the user forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    errors: BTreeMap<String, String>,
}

impl UserForm {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            errors: BTreeMap::new(),
        }
    }

    pub fn fields(&self) -> UserFields {
        UserFields::new(self.name.trim(), self.email.trim(), self.phone.trim())
    }

    /// Validated fields, or `None` with the errors recorded on the form
    pub fn validate(&mut self) -> Option<UserFields> {
        let fields = self.fields();
        match validate_fields(&fields) {
            Ok(()) => {
                self.errors.clear();
                Some(fields)
            }
            Err(errors) => {
                self.errors = errors
                    .iter()
                    .map(|error| (error.field().to_string(), error.message().to_string()))
                    .collect();
                None
            }
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
