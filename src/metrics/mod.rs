//! Basic metrics instrumentation for the booking scheduler.
//!
//! Provides counters for submissions, decisions and notification dispatch.

use crate::error::Rejection;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Notification channel, used to attribute dispatch counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }
}

/// Metrics collector for scheduler activity.
///
/// Cloning is cheap and all clones share the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of reservations submitted
    submissions_total: Arc<AtomicU64>,

    /// Reservations accepted and stored
    accepted_total: Arc<AtomicU64>,

    /// Rejections on the blackout day
    blackout_rejections_total: Arc<AtomicU64>,

    /// Rejections for times off the hour
    time_slot_rejections_total: Arc<AtomicU64>,

    /// Rejections for full hours
    capacity_rejections_total: Arc<AtomicU64>,

    sms_sent_total: Arc<AtomicU64>,
    emails_sent_total: Arc<AtomicU64>,

    /// Notifications the gateway reported as failed
    notification_failures_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            accepted_total: Arc::new(AtomicU64::new(0)),
            blackout_rejections_total: Arc::new(AtomicU64::new(0)),
            time_slot_rejections_total: Arc::new(AtomicU64::new(0)),
            capacity_rejections_total: Arc::new(AtomicU64::new(0)),
            sms_sent_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            notification_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a reservation entering `submit`.
    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an accepted reservation.
    pub fn record_accepted(&self) {
        self.accepted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejection, bucketed by kind.
    pub fn record_rejection(&self, rejection: &Rejection) {
        let counter = match rejection {
            Rejection::Blackout => &self.blackout_rejections_total,
            Rejection::InvalidTimeSlot(_) => &self.time_slot_rejections_total,
            Rejection::CapacityExceeded { .. } => &self.capacity_rejections_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a notification dispatch on `channel`.
    pub fn record_notification(&self, channel: Channel, success: bool) {
        if !success {
            self.notification_failures_total
                .fetch_add(1, Ordering::Relaxed);
            return;
        }

        match channel {
            Channel::Sms => self.sms_sent_total.fetch_add(1, Ordering::Relaxed),
            Channel::Email => self.emails_sent_total.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn accepted_total(&self) -> u64 {
        self.accepted_total.load(Ordering::Relaxed)
    }

    /// Get total rejections across all kinds.
    pub fn rejected_total(&self) -> u64 {
        self.blackout_rejections_total.load(Ordering::Relaxed)
            + self.time_slot_rejections_total.load(Ordering::Relaxed)
            + self.capacity_rejections_total.load(Ordering::Relaxed)
    }

    pub fn sms_sent_total(&self) -> u64 {
        self.sms_sent_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn notification_failures_total(&self) -> u64 {
        self.notification_failures_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            accepted_total: self.accepted_total(),
            blackout_rejections_total: self.blackout_rejections_total.load(Ordering::Relaxed),
            time_slot_rejections_total: self.time_slot_rejections_total.load(Ordering::Relaxed),
            capacity_rejections_total: self.capacity_rejections_total.load(Ordering::Relaxed),
            sms_sent_total: self.sms_sent_total(),
            emails_sent_total: self.emails_sent_total(),
            notification_failures_total: self.notification_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub accepted_total: u64,
    pub blackout_rejections_total: u64,
    pub time_slot_rejections_total: u64,
    pub capacity_rejections_total: u64,
    pub sms_sent_total: u64,
    pub emails_sent_total: u64,
    pub notification_failures_total: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "submissions={} accepted={} rejected(blackout={} time_slot={} capacity={}) \
             sms_sent={} emails_sent={} notification_failures={}",
            self.submissions_total,
            self.accepted_total,
            self.blackout_rejections_total,
            self.time_slot_rejections_total,
            self.capacity_rejections_total,
            self.sms_sent_total,
            self.emails_sent_total,
            self.notification_failures_total
        )
    }
}
