//! Booking scheduler.
//!
//! The scheduler validates a reservation against the booking rules, stores it
//! when every rule passes and then notifies the contact:
//!
//! 1. no submissions on the blackout day ([`rules::BLACKOUT_DAY`]),
//! 2. the requested time must be exactly on the hour,
//! 3. seats booked for that hour plus the party must fit the hourly capacity.
//!
//! The first failing rule decides the rejection. Checking capacity and storing
//! the reservation happen under a single lock, so concurrent submissions for
//! the same hour cannot overbook it.

mod ledger;
pub mod rules;
mod slot;

pub use slot::HourSlot;

use crate::clock::{Clock, SystemClock};
use crate::error::{BookingResult, NotificationResult};
use crate::metrics::{Channel, Metrics};
use crate::models::{Reservation, ReservationId};
use crate::notifications::NotificationGateway;
use chrono::NaiveDateTime;
use ledger::CapacityLedger;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub reservation_id: ReservationId,
    pub slot: HourSlot,
    /// Seats still free in `slot` after this booking
    pub remaining_capacity: u32,
}

/// Accepts or rejects reservations for a single restaurant.
pub struct BookingScheduler {
    capacity_per_hour: u32,
    ledger: Mutex<CapacityLedger>,
    gateway: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
    metrics: Metrics,
}

impl BookingScheduler {
    /// Create a scheduler with an explicit time source.
    ///
    /// `capacity_per_hour` must be positive; `Config::from_env` enforces this
    /// for configured values.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `capacity_per_hour` is zero.
    pub fn new(
        capacity_per_hour: u32,
        gateway: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        debug_assert!(capacity_per_hour > 0, "capacity per hour must be positive");
        Self {
            capacity_per_hour,
            ledger: Mutex::new(CapacityLedger::default()),
            gateway,
            clock,
            metrics: Metrics::new(),
        }
    }

    /// Create a scheduler that reads the wall clock.
    pub fn with_system_clock(capacity_per_hour: u32, gateway: Arc<dyn NotificationGateway>) -> Self {
        Self::new(capacity_per_hour, gateway, Arc::new(SystemClock))
    }

    /// The current time according to the injected clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn capacity_per_hour(&self) -> u32 {
        self.capacity_per_hour
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Submit a reservation.
    ///
    /// On success the reservation is stored, an SMS is sent, and an email is
    /// sent if the contact has an email address. Notification failures are
    /// logged and do not change the decision.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`](crate::error::Rejection) of the first failing
    /// rule. A rejected reservation is neither stored nor notified.
    pub async fn submit(&self, reservation: Reservation) -> BookingResult<Confirmation> {
        self.metrics.record_submission();

        let confirmation = match self.commit(&reservation).await {
            Ok(confirmation) => confirmation,
            Err(rejection) => {
                tracing::warn!(
                    reservation_id = %reservation.id(),
                    date_time = %reservation.date_time(),
                    party_size = reservation.party_size(),
                    kind = rejection.kind(),
                    "Reservation rejected: {}",
                    rejection
                );
                self.metrics.record_rejection(&rejection);
                return Err(rejection);
            }
        };

        tracing::info!(
            reservation_id = %reservation.id(),
            slot = %confirmation.slot,
            party_size = reservation.party_size(),
            remaining = confirmation.remaining_capacity,
            "Reservation accepted"
        );
        self.metrics.record_accepted();

        self.notify(&reservation).await;

        Ok(confirmation)
    }

    /// Apply the rules and store the reservation if they all pass.
    async fn commit(&self, reservation: &Reservation) -> BookingResult<Confirmation> {
        let now = self.now();
        rules::check_blackout(now)?;
        tracing::debug!(now = %now, "Blackout rule passed");

        rules::check_on_the_hour(reservation.date_time())?;
        tracing::debug!(date_time = %reservation.date_time(), "Time slot rule passed");

        let slot = HourSlot::of(reservation.date_time());
        let mut ledger = self.ledger.lock().await;
        let booked = ledger.booked(slot);
        rules::check_capacity(
            slot,
            booked,
            reservation.party_size(),
            self.capacity_per_hour,
        )?;
        tracing::debug!(slot = %slot, booked = booked, "Capacity rule passed");

        let remaining_capacity = self
            .capacity_per_hour
            .saturating_sub(booked)
            .saturating_sub(reservation.party_size());
        ledger.record(reservation.clone());

        Ok(Confirmation {
            reservation_id: reservation.id(),
            slot,
            remaining_capacity,
        })
    }

    async fn notify(&self, reservation: &Reservation) {
        let result = self.gateway.send_sms(reservation).await;
        self.report(Channel::Sms, reservation, result);

        if reservation.contact().has_email() {
            let result = self.gateway.send_email(reservation).await;
            self.report(Channel::Email, reservation, result);
        }
    }

    fn report(&self, channel: Channel, reservation: &Reservation, result: NotificationResult<()>) {
        if let Err(e) = &result {
            tracing::warn!(
                reservation_id = %reservation.id(),
                channel = channel.as_str(),
                "Notification failed: {}",
                e
            );
        }
        self.metrics.record_notification(channel, result.is_ok());
    }

    /// Whether this exact reservation has been accepted.
    pub async fn exists(&self, reservation: &Reservation) -> bool {
        self.ledger.lock().await.contains(reservation.id())
    }

    /// Seats booked in the hour containing `at`.
    pub async fn booked_seats(&self, at: NaiveDateTime) -> u32 {
        self.ledger.lock().await.booked(HourSlot::of(at))
    }

    /// Seats still free in the hour containing `at`.
    pub async fn remaining_capacity(&self, at: NaiveDateTime) -> u32 {
        self.capacity_per_hour
            .saturating_sub(self.booked_seats(at).await)
    }

    /// Number of accepted reservations.
    pub async fn accepted_count(&self) -> usize {
        self.ledger.lock().await.len()
    }
}
