//! Driving port for direct event registrations.

use async_trait::async_trait;

use crate::domain::{Error, EventId, Registration, UserId};

/// Register attendees for events and list their registrations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Register `user_id` for `event_id`.
    ///
    /// # Errors
    ///
    /// - `not_found` when the user or event does not exist.
    /// - `conflict` when the user is already registered for the event.
    async fn register(&self, user_id: UserId, event_id: EventId) -> Result<Registration, Error>;

    /// Registrations held by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Registration>, Error>;
}
