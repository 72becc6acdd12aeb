//! Booking rules, applied in order by the scheduler.
//!
//! Each rule is a pure function returning the rejection it is responsible for.

use super::HourSlot;
use crate::error::{BookingResult, Rejection};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Day of the week on which no reservations are taken.
pub const BLACKOUT_DAY: Weekday = Weekday::Sun;

/// Reject when the submission itself happens on the blackout day.
///
/// `now` is the submission time, not the requested reservation time.
pub fn check_blackout(now: NaiveDateTime) -> BookingResult<()> {
    if now.weekday() == BLACKOUT_DAY {
        return Err(Rejection::Blackout);
    }
    Ok(())
}

/// Reject unless `at` is exactly on an hour boundary.
pub fn check_on_the_hour(at: NaiveDateTime) -> BookingResult<()> {
    if at.minute() != 0 || at.second() != 0 || at.nanosecond() != 0 {
        return Err(Rejection::InvalidTimeSlot(at));
    }
    Ok(())
}

/// Reject when `requested` more people would push `slot` past `capacity`.
pub fn check_capacity(
    slot: HourSlot,
    booked: u32,
    requested: u32,
    capacity: u32,
) -> BookingResult<()> {
    match booked.checked_add(requested) {
        Some(total) if total <= capacity => Ok(()),
        _ => Err(Rejection::CapacityExceeded {
            slot,
            requested,
            booked,
            capacity,
        }),
    }
}
