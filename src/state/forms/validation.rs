//! Field validation rules
//!
//! Every validator maps the raw field value to an error message. An empty
//! string means the value is valid. Rules are checked in a fixed order and
//! only the first failing rule is reported.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum name length, in characters
pub const NAME_MAX_CHARS: usize = 30;

/// Passwords must be strictly longer than this many characters
pub const PASSWORD_MIN_EXCLUSIVE: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate the full name field
pub fn validate_name(name: &str) -> String {
    if name.is_empty() {
        "Name is required".to_string()
    } else if name.chars().count() > NAME_MAX_CHARS {
        format!("Name cannot exceed {NAME_MAX_CHARS} characters")
    } else {
        String::new()
    }
}

/// Validate the email field
pub fn validate_email(email: &str) -> String {
    if email.is_empty() {
        "Email is required".to_string()
    } else if !EMAIL_PATTERN.is_match(email) {
        "Email is invalid".to_string()
    } else {
        String::new()
    }
}

/// Validate the password field
///
/// Length is checked before any character class, so a short password only
/// reports the length rule.
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        return "Password is required".to_string();
    }
    if password.chars().count() <= PASSWORD_MIN_EXCLUSIVE {
        return format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_EXCLUSIVE + 1
        );
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return "Password must contain at least one lowercase letter".to_string();
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return "Password must contain at least one uppercase letter".to_string();
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return "Password must contain at least one number".to_string();
    }
    // Anything outside [a-zA-Z0-9] counts, including non-ASCII
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return "Password must contain at least one special character".to_string();
    }
    String::new()
}

/// Validate the occupation selection
pub fn validate_occupation(occupation: &str) -> String {
    if occupation.is_empty() {
        "Occupation is required".to_string()
    } else {
        String::new()
    }
}

/// Validate the state selection
pub fn validate_state(state: &str) -> String {
    if state.is_empty() {
        "State is required".to_string()
    } else {
        String::new()
    }
}
