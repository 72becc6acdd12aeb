//! Incoming reservation request as read by the command-line driver.

use super::{Contact, Reservation};
use crate::domain::ValidationError;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::sync::Arc;

/// Flat reservation request, one per input line.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,

    /// A blank email is treated as no email.
    #[serde(default)]
    pub email: Option<String>,

    /// Restaurant-local time, e.g. `2021-02-01T10:00:00`
    pub date_time: NaiveDateTime,

    pub party_size: u32,
}

impl ReservationRequest {
    /// Build the contact and reservation this request describes.
    pub fn into_reservation(self) -> Result<Reservation, ValidationError> {
        let contact = match self.email.filter(|email| !email.trim().is_empty()) {
            Some(email) => Contact::with_email(self.name, self.phone, email)?,
            None => Contact::new(self.name, self.phone)?,
        };

        Reservation::new(self.date_time, self.party_size, Arc::new(contact))
    }
}
