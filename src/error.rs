//! Error types for the booking scheduler.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain construction errors live in [`crate::domain::ValidationError`].

use crate::scheduler::HourSlot;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Message carried by [`Rejection::CapacityExceeded`]. Callers match on it.
pub const CAPACITY_EXCEEDED_MESSAGE: &str = "Number of people is over restaurant capacity per hour";

/// Reasons a submitted reservation is rejected by the scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Submission happened on the blackout day
    #[error("Reservations are not accepted on Sunday")]
    Blackout,

    /// Requested time is not on an hour boundary
    #[error("Reservation time {0} is not on the hour")]
    InvalidTimeSlot(NaiveDateTime),

    /// The hour is already too full for this party
    #[error("Number of people is over restaurant capacity per hour")]
    CapacityExceeded {
        slot: HourSlot,
        requested: u32,
        booked: u32,
        capacity: u32,
    },
}

impl Rejection {
    /// Short stable label, used for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Blackout => "blackout",
            Self::InvalidTimeSlot(_) => "invalid_time_slot",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}

/// Errors that can occur when delivering a notification.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Notification endpoint returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Nowhere to send the notification
    #[error("Missing recipient: {0}")]
    MissingRecipient(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for scheduler decisions
pub type BookingResult<T> = Result<T, Rejection>;

/// Convenience type alias for Results with NotificationError
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
