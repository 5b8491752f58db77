//! Form field validators.
//!
//! A validator pairs a predicate over a field's string value with the
//! user-facing message shown when the predicate fails. Validators run in
//! order and the first failure wins; surfacing the message is the
//! caller's concern.

use std::sync::OnceLock;

use regex::Regex;
use secrecy::SecretString;
use thiserror::Error;

use crate::scorer;

/// Error returned when a field value fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The failed validator's user-facing message.
    pub message: &'static str,
}

/// A field validator: a predicate paired with the message shown on
/// failure. The predicate returns `true` when the value is valid.
#[derive(Clone, Copy)]
pub struct Validator {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl Validator {
    pub const fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Runs `validators` against a field value in order.
///
/// # Returns
/// - `Ok(())` if every validator passes
/// - `Err(ValidationError)` carrying the first failing validator's message
pub fn validate_field(value: &str, validators: &[Validator]) -> Result<(), ValidationError> {
    for validator in validators {
        if !(validator.check)(value) {
            #[cfg(feature = "tracing")]
            tracing::debug!("field validation failed: {}", validator.message);
            return Err(ValidationError {
                message: validator.message,
            });
        }
    }
    Ok(())
}

/// Whether the value is empty or whitespace-only.
pub fn is_empty(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Whether the value contains at least one non-whitespace character.
pub fn is_not_empty(value: &str) -> bool {
    !is_empty(value)
}

/// Whether the value is an integral number.
pub fn is_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// Whether the value is a number with a fractional part.
///
/// Integral values are not floats here; the two predicates partition
/// numeric input.
pub fn is_float(value: &str) -> bool {
    if is_integer(value) {
        return false;
    }
    value
        .trim()
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false)
}

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(
            r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
        )
        .unwrap()
    })
}

/// Whether the value looks like an email address.
///
/// Accepts dotted or quoted local parts and either a dotted domain or a
/// bracketed IPv4 literal.
pub fn is_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Whether the password is too short to consider (5 characters or fewer).
pub fn too_short(value: &str) -> bool {
    value.chars().count() <= 5
}

/// Whether the password is too long to consider (41 characters or more).
pub fn too_long(value: &str) -> bool {
    value.chars().count() >= 41
}

/// Whether the password scores above the acceptance threshold.
pub fn acceptable_password(value: &str) -> bool {
    let password = SecretString::new(value.to_string().into());
    scorer::is_acceptable(&password)
}

/// The validation chain for a new-password field: length bounds first,
/// strength last.
pub fn password_validators() -> Vec<Validator> {
    vec![
        Validator::new(
            |v| !too_short(v),
            "Password must be longer than 5 characters",
        ),
        Validator::new(
            |v| !too_long(v),
            "Password must be shorter than 41 characters",
        ),
        Validator::new(acceptable_password, "Password is not strong enough"),
    ]
}
