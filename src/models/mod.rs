//! Data models for the booking scheduler.
//!
//! This module contains the contact and reservation value objects, plus the
//! flat request shape read by the command-line driver.

pub mod contact;
pub mod request;
pub mod reservation;

pub use contact::{Contact, ContactRef};
pub use request::ReservationRequest;
pub use reservation::{Reservation, ReservationId};
