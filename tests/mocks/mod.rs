//! Test doubles and fixtures shared by the integration tests.

mod recording_gateway;

#[allow(unused_imports)]
pub use recording_gateway::RecordingGateway;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use restaurant_booking::{BookingScheduler, Contact, ContactRef, FixedClock, Reservation};
use std::sync::Arc;

#[allow(dead_code)]
pub const CAPACITY_PER_HOUR: u32 = 3;
#[allow(dead_code)]
pub const NUMBER_OF_PEOPLE_FOR_TABLE: u32 = 2;

/// 2021-02-01 10:00, a Monday on the hour.
#[allow(dead_code)]
pub fn on_the_hour() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 2, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

/// 2021-02-01 10:30.
#[allow(dead_code)]
pub fn not_on_the_hour() -> NaiveDateTime {
    on_the_hour() + Duration::minutes(30)
}

/// 2021-01-01 00:00, a Friday.
#[allow(dead_code)]
pub fn not_sunday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// 2021-01-03 00:00, a Sunday.
#[allow(dead_code)]
pub fn sunday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[allow(dead_code)]
pub fn customer() -> ContactRef {
    Arc::new(Contact::new("user-name", "010-1234-5678").unwrap())
}

#[allow(dead_code)]
pub fn customer_with_email() -> ContactRef {
    Arc::new(Contact::with_email("user-name", "010-1234-5678", "email@google.com").unwrap())
}

#[allow(dead_code)]
pub fn reservation(at: NaiveDateTime, party_size: u32, contact: ContactRef) -> Reservation {
    Reservation::new(at, party_size, contact).unwrap()
}

/// Scheduler with the default capacity, submitting "now" = `now`.
#[allow(dead_code)]
pub fn scheduler_at(now: NaiveDateTime, gateway: &RecordingGateway) -> BookingScheduler {
    BookingScheduler::new(
        CAPACITY_PER_HOUR,
        Arc::new(gateway.clone()),
        Arc::new(FixedClock::new(now)),
    )
}
