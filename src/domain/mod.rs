//! Domain value objects and types.
//!
//! Value objects here are validated at construction time so that an invalid
//! email address can never reach a contact or the scheduler.

pub mod email;
pub mod errors;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
