use super::HourSlot;
use crate::models::{Reservation, ReservationId};
use std::collections::HashMap;

/// Accepted reservations and the seats they occupy per hour.
#[derive(Debug, Default)]
pub(crate) struct CapacityLedger {
    accepted: Vec<Reservation>,
    booked: HashMap<HourSlot, u32>,
}

impl CapacityLedger {
    /// Seats already taken in `slot`.
    pub(crate) fn booked(&self, slot: HourSlot) -> u32 {
        self.booked.get(&slot).copied().unwrap_or(0)
    }

    /// Store an accepted reservation. Capacity must already have been checked.
    pub(crate) fn record(&mut self, reservation: Reservation) {
        let slot = HourSlot::of(reservation.date_time());
        let seats = self.booked.entry(slot).or_insert(0);
        *seats = seats.saturating_add(reservation.party_size());
        self.accepted.push(reservation);
    }

    pub(crate) fn contains(&self, id: ReservationId) -> bool {
        self.accepted.iter().any(|reservation| reservation.id() == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.accepted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn reservation(hour: u32, party_size: u32) -> Reservation {
        let contact = Arc::new(Contact::new("user-name", "010-1234-5678").unwrap());
        Reservation::new(at(hour), party_size, contact).unwrap()
    }

    #[test]
    fn test_ledger_sums_per_slot() {
        let mut ledger = CapacityLedger::default();
        ledger.record(reservation(10, 2));
        ledger.record(reservation(10, 1));
        ledger.record(reservation(11, 5));

        assert_eq!(ledger.booked(HourSlot::of(at(10))), 3);
        assert_eq!(ledger.booked(HourSlot::of(at(11))), 5);
        assert_eq!(ledger.booked(HourSlot::of(at(12))), 0);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_ledger_contains_by_id() {
        let mut ledger = CapacityLedger::default();
        let stored = reservation(10, 2);
        let lookalike = reservation(10, 2);
        ledger.record(stored.clone());

        assert!(ledger.contains(stored.id()));
        assert!(!ledger.contains(lookalike.id()));
    }
}
