//! Read-only access to the seeded event catalogue.

use async_trait::async_trait;

use crate::domain::ports::EventCatalogue;
use crate::domain::{Error, Event, EventId, Store};

/// Catalogue service implementing the [`EventCatalogue`] port.
#[derive(Clone)]
pub struct CatalogueService {
    store: Store,
}

impl CatalogueService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventCatalogue for CatalogueService {
    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        let store = self.store.lock()?;
        Ok(store.events().cloned().collect())
    }

    async fn get_event(&self, event_id: EventId) -> Result<Option<Event>, Error> {
        let store = self.store.lock()?;
        Ok(store.event(event_id).cloned())
    }
}
