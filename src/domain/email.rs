//! EmailAddress value object and the email syntax predicate.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// One `@`, non-empty parts, letters/digits/`.`/`-`/`_` only.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9._-]+$").expect("email pattern is a valid regex")
});

/// Check whether `candidate` has the shape `<local-part>@<domain-part>`.
///
/// Both parts must be non-empty and contain only ASCII letters, digits,
/// `.`, `-` or `_`. Anything else, including a second `@`, is rejected.
///
/// ```
/// use restaurant_booking::domain::is_valid_email;
///
/// assert!(is_valid_email("email@email.com"));
/// assert!(!is_valid_email("email-without-at"));
/// ```
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time
/// with [`is_valid_email`].
///
/// # Example
///
/// ```
/// use restaurant_booking::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
