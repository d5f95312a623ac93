//! Event catalogue handlers.
//!
//! ```text
//! GET /api/events
//! GET /api/events/{id}
//! ```

use actix_web::{get, web};

use crate::domain::{Error, Event, EventId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// List every event in identifier order.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Seeded events", body = [Event]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "listEvents"
)]
#[get("/events")]
pub async fn list_events(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Event>>> {
    let events = state.catalogue.list_events().await?;
    Ok(web::Json(events))
}

/// Fetch a single event.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = u64, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Event not found", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEvent"
)]
#[get("/events/{id}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Event>> {
    state
        .catalogue
        .get_event(EventId::new(path.into_inner()))
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found("Event not found"))
}
