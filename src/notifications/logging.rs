use super::NotificationGateway;
use crate::error::NotificationResult;
use crate::models::Reservation;
use async_trait::async_trait;

/// Gateway that only records notifications in the log.
///
/// Used when no notification service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotificationGateway;

#[async_trait]
impl NotificationGateway for LoggingNotificationGateway {
    async fn send_sms(&self, reservation: &Reservation) -> NotificationResult<()> {
        tracing::info!(
            reservation_id = %reservation.id(),
            to = %reservation.contact().phone(),
            date_time = %reservation.date_time(),
            party_size = reservation.party_size(),
            "SMS notification"
        );
        Ok(())
    }

    async fn send_email(&self, reservation: &Reservation) -> NotificationResult<()> {
        let to = reservation
            .contact()
            .email()
            .map(|email| email.as_str())
            .unwrap_or("<none>");

        tracing::info!(
            reservation_id = %reservation.id(),
            to = %to,
            date_time = %reservation.date_time(),
            party_size = reservation.party_size(),
            "Email notification"
        );
        Ok(())
    }
}
