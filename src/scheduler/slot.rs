//! Hourly capacity windows.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;

/// A reservation time truncated to the start of its hour.
///
/// All reservations sharing a slot draw from the same per-hour capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HourSlot(NaiveDateTime);

impl HourSlot {
    /// The slot containing `at`.
    pub fn of(at: NaiveDateTime) -> Self {
        // the hour of a valid timestamp is always a valid hour
        let start = at.date().and_hms_opt(at.hour(), 0, 0).unwrap_or(at);
        Self(start)
    }

    /// First instant of the slot.
    pub fn start(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for HourSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:00"))
    }
}
