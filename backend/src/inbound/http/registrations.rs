//! Direct event registration handlers.
//!
//! ```text
//! POST /api/registrations
//! GET  /api/registrations/{userId}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EventId, Registration, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Registration payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Attendee to register.
    pub user_id: Option<UserId>,
    /// Event to register for.
    pub event_id: Option<EventId>,
}

/// Register a user for an event.
#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = RegistrationRequest,
    responses(
        (status = 200, description = "Pending registration", body = Registration),
        (status = 400, description = "Missing field or already registered", body = ErrorSchema),
        (status = 404, description = "User or event not found", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "createRegistration"
)]
#[post("/registrations")]
pub async fn create_registration(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationRequest>,
) -> ApiResult<web::Json<Registration>> {
    let RegistrationRequest { user_id, event_id } = payload.into_inner();
    let user_id = require(user_id, FieldName::new("userId"))?;
    let event_id = require(event_id, FieldName::new("eventId"))?;

    let registration = state.registrations.register(user_id, event_id).await?;
    Ok(web::Json(registration))
}

/// List a user's registrations, oldest first.
#[utoipa::path(
    get,
    path = "/api/registrations/{userId}",
    params(("userId" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Registrations", body = [Registration])
    ),
    tags = ["registrations"],
    operation_id = "listRegistrations"
)]
#[get("/registrations/{user_id}")]
pub async fn list_registrations(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Registration>>> {
    let registrations = state
        .registrations
        .list_by_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(registrations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Error, RegistrationId};
    use crate::inbound::http::test_utils::{MockPorts, assert_error, send};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[actix_web::test]
    async fn create_registration_returns_pending_row() {
        let mut ports = MockPorts::default();
        ports
            .registrations
            .expect_register()
            .withf(|user, event| *user == UserId::new(3) && *event == EventId::new(1))
            .times(1)
            .returning(|user, event| Ok(Registration::new(RegistrationId::new(1), user, event)));

        let request = actix_test::TestRequest::post()
            .uri("/api/registrations")
            .set_json(json!({"userId": 3, "eventId": 1}));
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "userId": 3,
                "eventId": 1,
                "teamId": null,
                "status": "pending",
                "paymentStatus": "pending",
            })
        );
    }

    #[rstest]
    #[case(json!({"eventId": 1}), "userId")]
    #[case(json!({"userId": 3}), "eventId")]
    #[actix_web::test]
    async fn create_registration_requires_both_ids(
        #[case] payload: serde_json::Value,
        #[case] field: &str,
    ) {
        let request = actix_test::TestRequest::post()
            .uri("/api/registrations")
            .set_json(payload);
        let (status, body) = send(MockPorts::default(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(
            &body,
            "invalid_request",
            &format!("missing required field: {field}"),
            Some(field),
        );
    }

    #[rstest]
    #[case(Error::not_found("Event not found"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("Already registered for this event"), StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn create_registration_maps_domain_errors(
        #[case] error: Error,
        #[case] expected: StatusCode,
    ) {
        let mut ports = MockPorts::default();
        ports
            .registrations
            .expect_register()
            .returning(move |_, _| Err(error.clone()));

        let request = actix_test::TestRequest::post()
            .uri("/api/registrations")
            .set_json(json!({"userId": 3, "eventId": 1}));
        let (status, _) = send(ports, request).await;

        assert_eq!(status, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_registrations_for_unknown_user_is_empty() {
        let mut ports = MockPorts::default();
        ports
            .registrations
            .expect_list_by_user()
            .withf(|user| *user == UserId::new(9))
            .returning(|_| Ok(Vec::new()));

        let request = actix_test::TestRequest::get().uri("/api/registrations/9");
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
