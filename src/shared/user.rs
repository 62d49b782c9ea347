//! User Record Types
//!
//! This module defines the user record as it travels between the two backends
//! and the in-memory collection.
//!
//! # Origin
//!
//! Records from the demo API carry a `username` attribute that records from the
//! local record store never carry. Its presence, whatever its value (even
//! `null`), is the discriminant. It is inspected exactly once,
//! when a [`WireUser`] becomes a [`UserRecord`], and the result is stored as an
//! explicit [`Origin`]. Every mutability check afterwards is a field test.
//!
//! # Wire Format
//!
//! ```json
//! { "id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz",
//!   "phone": "1-770-736-8031 x56442", "username": "Bret", "website": "..." }
//! ```
//!
//! Unknown attributes are kept in [`UserRecord`] and written back on a full
//! record replace.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Source-assigned user identifier.
///
/// The demo API uses integers; the record store may hand out strings.
/// `Int(5)` and `Text("5")` are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(value) => write!(f, "{}", value),
            UserId::Text(value) => write!(f, "{}", value),
        }
    }
}

impl FromStr for UserId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map(UserId::Int)
            .unwrap_or_else(|_| UserId::Text(trimmed.to_string())))
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Int(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

/// Attribute whose presence marks a demo API record
pub const USERNAME_KEY: &str = "username";

/// Mutability class of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Owned by the demo API; never mutated through this client
    ReadOnly,
    /// Owned by the local record store; supports create/update/delete
    Writable,
}

impl Origin {
    /// Classify a wire record. Presence of `username` is the sole discriminant.
    pub fn classify(wire: &WireUser) -> Self {
        if wire.extra.contains_key(USERNAME_KEY) {
            Origin::ReadOnly
        } else {
            Origin::Writable
        }
    }

    pub fn is_read_only(self) -> bool {
        matches!(self, Origin::ReadOnly)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::ReadOnly => write!(f, "read-only"),
            Origin::Writable => write!(f, "writable"),
        }
    }
}

/// JSON shape shared by both backends.
///
/// `username` and any other attribute beyond the editable fields land in
/// `extra` untouched, so a `null` or non-string `username` still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireUser {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Editable fields of a user. Also the POST body for create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// A user record held in the merged collection.
///
/// `origin` and `username` are fixed at construction; only the editable
/// fields can be changed, and only by producing a new record through
/// [`UserRecord::with_fields`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    origin: Origin,
    extra: Map<String, Value>,
}

impl UserRecord {
    /// Convert a wire record, classifying its origin
    pub fn from_wire(wire: WireUser) -> Self {
        let origin = Origin::classify(&wire);
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            origin,
            extra: wire.extra,
        }
    }

    /// Build a record owned by the record store
    pub fn writable(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            origin: Origin::Writable,
            extra: Map::new(),
        }
    }

    /// Convert a record returned by the record store's create endpoint.
    ///
    /// Created records are always writable; a stray `username` echoed back by
    /// the backend is dropped.
    pub fn created(wire: WireUser) -> Self {
        let mut extra = wire.extra;
        if extra.remove(USERNAME_KEY).is_some() {
            tracing::warn!(id = %wire.id, "record store echoed a username on create, ignoring it");
        }
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            origin: Origin::Writable,
            extra,
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_read_only(&self) -> bool {
        self.origin.is_read_only()
    }

    /// Demo API handle, when it is a string
    pub fn username(&self) -> Option<&str> {
        self.extra.get(USERNAME_KEY).and_then(Value::as_str)
    }

    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Copy of this record with new editable fields; identifier, origin and
    /// extra attributes are preserved.
    pub fn with_fields(&self, fields: UserFields) -> Self {
        Self {
            id: self.id.clone(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            origin: self.origin,
            extra: self.extra.clone(),
        }
    }

    pub fn to_wire(&self) -> WireUser {
        WireUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl From<WireUser> for UserRecord {
    fn from(wire: WireUser) -> Self {
        Self::from_wire(wire)
    }
}
