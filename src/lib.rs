//! Password strength scoring and form field validation library
//!
//! This library scores candidate passwords with a fixed additive table,
//! gates acceptance at a fixed threshold, and provides the field
//! validators admin console forms are built from.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{breakdown, is_acceptable, score};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! println!("Score: {}", score(&password));
//! println!("Acceptable: {}", is_acceptable(&password));
//! println!("Breakdown: {:?}", breakdown(&password));
//! ```

// Internal modules
mod counts;
mod scorer;
mod sections;
mod types;
mod validators;

// Public API
pub use counts::{CharCounts, DIGITS, LOWERCASE, SPECIALS, UPPERCASE, count_matching};
pub use scorer::{ACCEPTANCE_THRESHOLD, breakdown, is_acceptable, score};
pub use types::ScoreBreakdown;
pub use validators::{
    ValidationError, Validator, acceptable_password, is_email, is_empty, is_float, is_integer,
    is_not_empty, password_validators, too_long, too_short, validate_field,
};

#[cfg(feature = "async")]
pub use scorer::score_tx;
