//! Reservation model: one requested booking for a party at a given time.

use super::contact::ContactRef;
use crate::domain::ValidationError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier assigned when a reservation is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single requested booking.
///
/// Whether `date_time` sits on an hour boundary is a business rule checked by
/// the scheduler, so any date-time is accepted here. Clones keep the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    date_time: NaiveDateTime,
    party_size: u32,
    contact: ContactRef,
}

impl Reservation {
    /// Create a reservation request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPartySize` if `party_size` is zero.
    pub fn new(
        date_time: NaiveDateTime,
        party_size: u32,
        contact: ContactRef,
    ) -> Result<Self, ValidationError> {
        if party_size == 0 {
            return Err(ValidationError::InvalidPartySize(party_size));
        }

        Ok(Self {
            id: ReservationId::generate(),
            date_time,
            party_size,
            contact,
        })
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    pub fn contact(&self) -> &ContactRef {
        &self.contact
    }
}
