//! Event registrations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EventId, RegistrationId, TeamId, UserId};

/// Review state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Awaiting review.
    Pending,
    Approved,
    Rejected,
}

/// Payment state of a registration. No gateway updates it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    Pending,
    Paid,
    Refunded,
}

/// A user's registration for one event.
///
/// At most one registration exists per (user, event) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    id: RegistrationId,
    user_id: UserId,
    event_id: EventId,
    team_id: Option<TeamId>,
    status: RegistrationStatus,
    payment_status: PaymentStatus,
}

impl Registration {
    /// New registration awaiting review and payment.
    pub fn new(id: RegistrationId, user_id: UserId, event_id: EventId) -> Self {
        Self {
            id,
            user_id,
            event_id,
            team_id: None,
            status: RegistrationStatus::Pending,
            payment_status: PaymentStatus::Pending,
        }
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// Registered attendee.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Team the attendee competes with, when one is linked.
    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_registration_is_pending_without_team() {
        let registration = Registration::new(RegistrationId::new(1), UserId::new(2), EventId::new(3));
        let value = serde_json::to_value(&registration).expect("serialise registration");
        assert_eq!(
            value,
            json!({
                "id": 1,
                "userId": 2,
                "eventId": 3,
                "teamId": null,
                "status": "pending",
                "paymentStatus": "pending",
            })
        );
    }
}
