//! Contact model representing the person making a reservation.

use crate::domain::{EmailAddress, ValidationError};
use serde::Serialize;
use std::sync::Arc;

/// Shared reference to a Contact.
///
/// Reservations hold the contact behind an `Arc` so that several bookings by
/// the same person do not copy it and the scheduler never mutates it.
pub type ContactRef = Arc<Contact>;

/// The person a reservation is booked for.
///
/// The phone number is kept as given; only the optional email address is
/// checked for syntax.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,
}

impl Contact {
    /// Create a contact without an email address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name,
            phone: phone.into(),
            email: None,
        })
    }

    /// Create a contact that should also be notified by email.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if `email` fails the syntax
    /// check, or `ValidationError::EmptyName` if `name` is blank.
    pub fn with_email(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = EmailAddress::new(email)?;
        let mut contact = Self::new(name, phone)?;
        contact.email = Some(email);
        Ok(contact)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Whether an email notification should go out for this contact.
    pub fn has_email(&self) -> bool {
        self.email
            .as_ref()
            .is_some_and(|email| !email.as_str().is_empty())
    }
}
