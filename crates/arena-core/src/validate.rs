//! Local input validation.
//!
//! Runs entirely before any network I/O; a failed check reports a
//! field-level error and the request is never issued.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Bangladeshi mobile numbers: optional +88/88 prefix, then 01[3-9] and
/// eight more digits.
static BD_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?88)?01[3-9]\d{8}$").expect("valid regex"));

/// A validation failure on a specific input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

pub fn validate_username(username: &str) -> Result<(), FieldError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("username", "Username is required"));
    }
    if trimmed.chars().count() < 3 {
        return Err(FieldError::new(
            "username",
            "Username must be at least 3 characters",
        ));
    }
    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), FieldError> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("full_name", "Full name is required"));
    }
    if trimmed.chars().count() < 3 {
        return Err(FieldError::new(
            "full_name",
            "Full name must be at least 3 characters",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("email", "Email is required"));
    }
    if !is_plausible_email(trimmed) {
        return Err(FieldError::new("email", "Please enter a valid email"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("phone", "Phone number is required"));
    }
    if !BD_MOBILE.is_match(trimmed) {
        return Err(FieldError::new(
            "phone",
            "Please enter a valid Bangladeshi mobile number",
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::new("password", "Password is required"));
    }
    if password.chars().count() < 6 {
        return Err(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

pub fn validate_ign(ign: &str) -> Result<(), FieldError> {
    if ign.trim().is_empty() {
        return Err(FieldError::new("ign", "Please enter your in-game name"));
    }
    Ok(())
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
