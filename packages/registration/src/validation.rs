//! Input patterns for the pre-registration form.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::draft::RegistrationDraft;
use crate::error::ValidationError;

// Letters are ASCII only; whitespace follows the regex crate's Unicode `\s`.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{2,}$").expect("name pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern compiles"));

/// Body of the pre-registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub occupation: String,
    pub organization: String,
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    NAME_PATTERN
        .is_match(name)
        .then_some(())
        .ok_or(ValidationError::Name)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    EMAIL_PATTERN
        .is_match(email)
        .then_some(())
        .ok_or(ValidationError::Email)
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    PHONE_PATTERN
        .is_match(phone)
        .then_some(())
        .ok_or(ValidationError::Phone)
}

impl RegistrationDraft {
    /// Check name, email and phone in that order and build the request body.
    ///
    /// The first failing field is reported; later fields are not examined.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        validate_name(self.name())?;
        validate_email(self.email())?;
        validate_phone(self.phone())?;

        Ok(Registration {
            name: self.name().to_string(),
            email: self.email().to_string(),
            phone: self.phone().to_string(),
            occupation: self.effective_occupation(),
            organization: self.organization().to_string(),
        })
    }
}
