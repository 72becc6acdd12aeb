//! Restaurant Booking - reservation scheduler for a single restaurant.
//!
//! Reservations are accepted only on the hour, never while it is Sunday, and
//! only while the hour has seats left. Accepted reservations trigger an SMS,
//! and an email when the contact has an address.
//!
//! # Architecture
//!
//! - **scheduler**: Booking rules, the accepted-reservation ledger, notification dispatch
//! - **notifications**: Notification gateway trait with HTTP and logging transports
//! - **models**: Contacts, reservations and the incoming request shape
//! - **domain**: Email value object and syntax predicate
//! - **clock**: Injectable current-time source
//! - **error**: Rejections and other error types
//! - **config**: Configuration management from environment variables
//! - **metrics**: Decision and notification counters

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notifications;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{is_valid_email, EmailAddress, ValidationError};
pub use error::{
    BookingResult, ConfigError, NotificationError, Rejection, CAPACITY_EXCEEDED_MESSAGE,
};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactRef, Reservation, ReservationId, ReservationRequest};
pub use notifications::{
    HttpNotificationGateway, LoggingNotificationGateway, NotificationClient, NotificationGateway,
};
pub use scheduler::{BookingScheduler, Confirmation, HourSlot};
