//! Test helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockCartCommand, MockEventCatalogue, MockRegistrationCommand, MockTeamLifecycle,
    MockUserAccounts,
};
use crate::inbound::http::routes;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// One mock per driving port. Ports a test does not touch keep no
/// expectations, so any call to them fails the test.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub accounts: MockUserAccounts,
    pub catalogue: MockEventCatalogue,
    pub registrations: MockRegistrationCommand,
    pub teams: MockTeamLifecycle,
    pub carts: MockCartCommand,
}

impl MockPorts {
    /// Move the mocks into handler state.
    pub(crate) fn into_state(self) -> HttpState {
        HttpState {
            accounts: Arc::new(self.accounts),
            catalogue: Arc::new(self.catalogue),
            registrations: Arc::new(self.registrations),
            teams: Arc::new(self.teams),
            carts: Arc::new(self.carts),
        }
    }
}

/// Serve `request` through the full `/api` route table backed by `ports`.
pub(crate) async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(ports.into_state()))
            .service(web::scope("/api").configure(routes::configure)),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is JSON")
    };
    (status, value)
}

/// Assert an error envelope's code, message and optional `details.field`.
pub(crate) fn assert_error(body: &Value, code: &str, message: &str, field: Option<&str>) {
    assert_eq!(body.get("code").and_then(Value::as_str), Some(code));
    assert_eq!(body.get("error").and_then(Value::as_str), Some(message));
    assert!(body.get("traceId").and_then(Value::as_str).is_some());
    if let Some(field) = field {
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some(field)
        );
    }
}
