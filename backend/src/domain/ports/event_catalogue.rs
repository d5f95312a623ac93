//! Driving port for browsing the event catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Event, EventId};

/// Read-only access to the seeded events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCatalogue: Send + Sync {
    /// Every seeded event in identifier order.
    async fn list_events(&self) -> Result<Vec<Event>, Error>;

    /// A single event, `None` when the identifier is unknown.
    async fn get_event(&self, event_id: EventId) -> Result<Option<Event>, Error>;
}
