//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing contacts and reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// A party must have at least one person.
    InvalidPartySize(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "email is not valid: {}", email),
            Self::InvalidPartySize(size) => write!(f, "Invalid party size: {}", size),
        }
    }
}

impl std::error::Error for ValidationError {}
