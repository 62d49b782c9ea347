//! Form validation for user fields.
//!
//! Rules: name is at least 3 characters, email looks like `x@y.z` with no
//! whitespace in any part, phone is exactly 10 ASCII digits.

use regex::Regex;
use std::sync::LazyLock;

use crate::shared::error::SharedError;
use crate::shared::user::UserFields;

pub const NAME_MESSAGE: &str = "Name is required and must be at least 3 characters long.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email.";
pub const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number.";

// Unanchored: any whitespace-free `x@y.z` run inside the input is enough
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_RE is a valid regex pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("PHONE_RE is a valid regex pattern"));

/// Validate all fields, returning one error per failing field
pub fn validate_fields(fields: &UserFields) -> Result<(), Vec<SharedError>> {
    let errors: Vec<SharedError> = [
        validate_name(&fields.name),
        validate_email(&fields.email),
        validate_phone(&fields.phone),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_name(name: &str) -> Result<(), SharedError> {
    if name.chars().count() < 3 {
        return Err(SharedError::validation("name", NAME_MESSAGE));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", EMAIL_MESSAGE))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), SharedError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(SharedError::validation("phone", PHONE_MESSAGE))
    }
}
