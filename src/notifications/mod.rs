//! Notification gateway for confirmed reservations.
//!
//! The scheduler only relies on how often each channel is called and with
//! which reservation; delivery is the gateway's business.

mod http;
mod logging;

pub use http::{HttpNotificationGateway, NotificationClient, NotificationPayload};
pub use logging::LoggingNotificationGateway;

use crate::error::NotificationResult;
use crate::models::Reservation;
use async_trait::async_trait;

/// Sends SMS and email notifications for an accepted reservation.
///
/// The two channels are independent. Implementations may fail; the scheduler
/// logs failures and never retries.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Send an SMS to the reservation's contact phone.
    async fn send_sms(&self, reservation: &Reservation) -> NotificationResult<()>;

    /// Send an email to the reservation's contact address.
    async fn send_email(&self, reservation: &Reservation) -> NotificationResult<()>;
}
