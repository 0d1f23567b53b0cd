//! # Validation Utilities
//!
//! Field-level validation primitives. Each check returns the caller-supplied
//! message on failure so schemas can keep their own wording.

use validator::ValidateEmail;

/// Validate that a string has at least `min` characters.
///
/// Counts `char`s, not bytes, so accented names are not penalized.
pub fn validate_min_chars(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validate email format against the HTML5 email grammar.
///
/// The domain must additionally be a dotted host name ending in an
/// alphabetic TLD of at least two letters, so `alice@localhost` and IP
/// literals are rejected.
pub fn validate_email(email: &str, message: &str) -> Result<(), String> {
    if email.validate_email() && has_public_domain(email) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

fn has_public_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    !hosts.is_empty()
        && hosts.iter().all(|label| is_host_label(label))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_host_label(label: &str) -> bool {
    label.starts_with(|c: char| c.is_ascii_alphanumeric())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Validate that two values are identical.
pub fn validate_equals(value: &str, other: &str, message: &str) -> Result<(), String> {
    if value == other {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
