//! Driven port for delivering verification codes to attendees.
//!
//! The domain hands each freshly issued code to this port once the store
//! lock has been released. Delivery failures never fail a registration; the
//! accounts service logs them and moves on.

use async_trait::async_trait;

use crate::domain::{Email, VerificationCode};

use super::define_port_error;

define_port_error! {
    /// Errors raised by verification code delivery adapters.
    pub enum VerificationDeliveryError {
        /// The delivery channel could not be reached.
        Unavailable { message: String } => "verification delivery unavailable: {message}",
        /// The channel refused the message for this recipient.
        Rejected { message: String } => "verification delivery rejected: {message}",
    }
}

/// Outbound channel that hands a code to its recipient.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationCodeSender: Send + Sync {
    /// Deliver `code` to `email`.
    async fn send(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> Result<(), VerificationDeliveryError>;
}
