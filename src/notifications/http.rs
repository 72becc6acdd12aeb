//! HTTP transport for notifications.
//!
//! [`NotificationClient`] is a synchronous `ureq` client; the gateway runs it
//! on tokio's blocking pool so the async runtime is never stalled on I/O.

use super::NotificationGateway;
use crate::config::Config;
use crate::error::{NotificationError, NotificationResult};
use crate::models::{Reservation, ReservationId};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// JSON body posted to the notification service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotificationPayload {
    pub reservation_id: ReservationId,
    /// Phone number for SMS, email address for email
    pub to: String,
    pub name: String,
    pub date_time: NaiveDateTime,
    pub party_size: u32,
}

impl NotificationPayload {
    /// Payload addressed to the contact's phone.
    pub fn sms(reservation: &Reservation) -> Self {
        Self::addressed(reservation, reservation.contact().phone().to_string())
    }

    /// Payload addressed to the contact's email.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::MissingRecipient` if the contact has no email.
    pub fn email(reservation: &Reservation) -> NotificationResult<Self> {
        let to = reservation
            .contact()
            .email()
            .map(|email| email.as_str().to_string())
            .ok_or_else(|| {
                NotificationError::MissingRecipient(format!(
                    "reservation {} has no contact email",
                    reservation.id()
                ))
            })?;

        Ok(Self::addressed(reservation, to))
    }

    fn addressed(reservation: &Reservation, to: String) -> Self {
        Self {
            reservation_id: reservation.id(),
            to,
            name: reservation.contact().name().to_string(),
            date_time: reservation.date_time(),
            party_size: reservation.party_size(),
        }
    }
}

/// Synchronous HTTP client for the notification service.
#[derive(Clone)]
pub struct NotificationClient {
    /// Base URL of the notification service
    base_url: String,

    /// Optional API key sent as `x-api-key`
    api_key: Option<String>,

    agent: Arc<ureq::Agent>,
}

impl NotificationClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.into(),
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Create a client from configuration, if a notification endpoint is set.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.notify_api_url.as_ref().map(|url| {
            Self::new(
                url.clone(),
                config.notify_api_key.clone(),
                Duration::from_secs(config.request_timeout),
            )
        })
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, payload: &NotificationPayload) -> NotificationResult<()> {
        let start = Instant::now();
        let url = self.build_url(path);

        let mut request = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json");
        if let Some(api_key) = &self.api_key {
            request = request.set("x-api-key", api_key);
        }

        let result = request.send_json(payload).map_err(|e| self.map_error(e));
        let duration_ms = start.elapsed().as_millis();

        match &result {
            Ok(response) => tracing::debug!(
                url = %url,
                status = response.status(),
                duration_ms = duration_ms,
                "Notification delivered"
            ),
            Err(e) => tracing::error!(url = %url, duration_ms = duration_ms, "POST failed: {}", e),
        }

        result.map(|_| ())
    }

    /// Post an SMS notification.
    pub fn send_sms(&self, payload: &NotificationPayload) -> NotificationResult<()> {
        self.post("/sms", payload)
    }

    /// Post an email notification.
    pub fn send_email(&self, payload: &NotificationPayload) -> NotificationResult<()> {
        self.post("/email", payload)
    }

    fn map_error(&self, error: ureq::Error) -> NotificationError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => NotificationError::Unauthorized,
                    _ => NotificationError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::Io {
                    NotificationError::Timeout
                } else {
                    NotificationError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// Notification gateway backed by [`NotificationClient`].
#[derive(Clone)]
pub struct HttpNotificationGateway {
    client: Arc<NotificationClient>,
}

impl HttpNotificationGateway {
    pub fn new(client: NotificationClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl NotificationGateway for HttpNotificationGateway {
    async fn send_sms(&self, reservation: &Reservation) -> NotificationResult<()> {
        let client = self.client.clone();
        let payload = NotificationPayload::sms(reservation);

        tokio::task::spawn_blocking(move || client.send_sms(&payload))
            .await
            .map_err(|e| NotificationError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn send_email(&self, reservation: &Reservation) -> NotificationResult<()> {
        let client = self.client.clone();
        let payload = NotificationPayload::email(reservation)?;

        tokio::task::spawn_blocking(move || client.send_email(&payload))
            .await
            .map_err(|e| NotificationError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use chrono::NaiveDate;

    fn reservation(contact: Contact) -> Reservation {
        let at = NaiveDate::from_ymd_opt(2021, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Reservation::new(at, 2, Arc::new(contact)).unwrap()
    }

    #[test]
    fn test_sms_payload_targets_phone() {
        let rsvp = reservation(Contact::new("user-name", "010-1234-5678").unwrap());
        let payload = NotificationPayload::sms(&rsvp);

        assert_eq!(payload.to, "010-1234-5678");
        assert_eq!(payload.reservation_id, rsvp.id());
        assert_eq!(payload.party_size, 2);
    }

    #[test]
    fn test_email_payload_requires_email() {
        let rsvp = reservation(Contact::new("user-name", "010-1234-5678").unwrap());
        assert!(matches!(
            NotificationPayload::email(&rsvp),
            Err(NotificationError::MissingRecipient(_))
        ));

        let rsvp = reservation(
            Contact::with_email("user-name", "010-1234-5678", "email@google.com").unwrap(),
        );
        assert_eq!(
            NotificationPayload::email(&rsvp).unwrap().to,
            "email@google.com"
        );
    }

    #[test]
    fn test_payload_serialization() {
        let rsvp = reservation(Contact::new("user-name", "010").unwrap());
        let json = serde_json::to_value(NotificationPayload::sms(&rsvp)).unwrap();

        assert_eq!(json["to"], "010");
        assert_eq!(json["date_time"], "2021-02-01T10:00:00");
        assert_eq!(json["reservation_id"], rsvp.id().to_string());
    }

    #[test]
    fn test_build_url() {
        let client = NotificationClient::new(
            "https://notify.example.com/",
            None,
            Duration::from_secs(1),
        );
        assert_eq!(client.build_url("/sms"), "https://notify.example.com/sms");
    }

    #[test]
    fn test_client_from_config() {
        let config = Config::default();
        assert!(NotificationClient::from_config(&config).is_none());

        let config = Config {
            notify_api_url: Some("https://notify.example.com".to_string()),
            ..Config::default()
        };
        assert!(NotificationClient::from_config(&config).is_some());
    }
}
