//! Direct event registrations.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::RegistrationCommand;
use crate::domain::{Error, EventId, Registration, Store, UserId};

/// Registration service implementing the [`RegistrationCommand`] port.
///
/// Attendance is not checked here; the attendance warning is a presentation
/// concern.
#[derive(Clone)]
pub struct RegistrationService {
    store: Store,
}

impl RegistrationService {
    /// Build the service over a shared store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegistrationCommand for RegistrationService {
    async fn register(&self, user_id: UserId, event_id: EventId) -> Result<Registration, Error> {
        let mut store = self.store.lock()?;
        if store.event(event_id).is_none() {
            return Err(Error::not_found("Event not found"));
        }
        if store.user(user_id).is_none() {
            return Err(Error::not_found("User not found"));
        }
        if store.registration_for(user_id, event_id).is_some() {
            return Err(Error::conflict("Already registered for this event"));
        }

        let id = store.next_registration_id();
        let registration = Registration::new(id, user_id, event_id);
        store.insert_registration(registration.clone());
        info!(%user_id, %event_id, registration_id = %id, "event registration created");
        Ok(registration)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Registration>, Error> {
        let store = self.store.lock()?;
        Ok(store.registrations_by_user(user_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service_test_helpers::{HACKATHON, WORKSHOP, insert_user, seeded_store};
    use crate::domain::{ErrorCode, PaymentStatus, RegistrationStatus};
    use rstest::{fixture, rstest};

    struct Harness {
        service: RegistrationService,
        user: UserId,
    }

    #[fixture]
    fn harness() -> Harness {
        let store = seeded_store();
        let user = insert_user(&store, "ada");
        Harness {
            service: RegistrationService::new(store),
            user,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn register_creates_pending_registration(harness: Harness) {
        let registration = harness
            .service
            .register(harness.user, EventId::new(HACKATHON))
            .await
            .expect("registration succeeds");

        assert_eq!(registration.status(), RegistrationStatus::Pending);
        assert_eq!(registration.payment_status(), PaymentStatus::Pending);
        assert!(registration.team_id().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_registration_is_a_conflict(harness: Harness) {
        let event = EventId::new(HACKATHON);
        harness.service.register(harness.user, event).await.expect("first");
        let error = harness
            .service
            .register(harness.user, event)
            .await
            .expect_err("duplicate rejected");
        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[case(99, None, "Event not found")]
    #[case(HACKATHON, Some(99), "User not found")]
    #[tokio::test]
    async fn missing_references_are_not_found(
        harness: Harness,
        #[case] event: u64,
        #[case] user: Option<u64>,
        #[case] message: &str,
    ) {
        let user = user.map_or(harness.user, UserId::new);
        let error = harness
            .service
            .register(user, EventId::new(event))
            .await
            .expect_err("missing reference");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), message);
    }

    #[rstest]
    #[tokio::test]
    async fn list_by_user_returns_only_that_users_registrations(harness: Harness) {
        let other = {
            let store = harness.service.store.clone();
            insert_user(&store, "grace")
        };
        harness
            .service
            .register(harness.user, EventId::new(HACKATHON))
            .await
            .expect("first");
        harness
            .service
            .register(other, EventId::new(WORKSHOP))
            .await
            .expect("other");
        harness
            .service
            .register(harness.user, EventId::new(WORKSHOP))
            .await
            .expect("second");

        let listed = harness.service.list_by_user(harness.user).await.expect("list");
        let events: Vec<u64> = listed.iter().map(|r| r.event_id().get()).collect();
        assert_eq!(events, vec![HACKATHON, WORKSHOP]);

        let empty = harness.service.list_by_user(UserId::new(99)).await.expect("list");
        assert!(empty.is_empty());
    }
}
