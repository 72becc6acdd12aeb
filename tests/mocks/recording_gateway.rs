use async_trait::async_trait;
use restaurant_booking::error::{NotificationError, NotificationResult};
use restaurant_booking::models::Reservation;
use restaurant_booking::notifications::NotificationGateway;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Notification gateway that records every call instead of sending anything.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingGateway {
    sent: Arc<Mutex<HashMap<String, Vec<Reservation>>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose every call is recorded and then reported as failed.
    pub fn failing() -> Self {
        let gateway = Self::new();
        gateway.failing.store(true, Ordering::SeqCst);
        gateway
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let sent = self.sent.lock().unwrap();
        sent.get(method).map_or(0, Vec::len)
    }

    pub fn last_sent(&self, method: &str) -> Option<Reservation> {
        let sent = self.sent.lock().unwrap();
        sent.get(method).and_then(|calls| calls.last().cloned())
    }

    pub fn sms_count(&self) -> usize {
        self.get_call_count("send_sms")
    }

    pub fn email_count(&self) -> usize {
        self.get_call_count("send_email")
    }

    fn track_call(&self, method: &str, reservation: &Reservation) -> NotificationResult<()> {
        let mut sent = self.sent.lock().unwrap();
        sent.entry(method.to_string())
            .or_default()
            .push(reservation.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::HttpError("recording gateway failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send_sms(&self, reservation: &Reservation) -> NotificationResult<()> {
        self.track_call("send_sms", reservation)
    }

    async fn send_email(&self, reservation: &Reservation) -> NotificationResult<()> {
        self.track_call("send_email", reservation)
    }
}
