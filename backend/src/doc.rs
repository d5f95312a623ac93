//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the error envelope schemas declared in
//! [`crate::inbound::http::schemas`]. Domain entities derive their own
//! schemas. The document backs Swagger UI in debug builds.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, SuccessResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fest registration API",
        description = "Attendee sign-up, event registration, hackathon teams and pass checkout."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::verify,
        crate::inbound::http::users::profile,
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::registrations::create_registration,
        crate::inbound::http::registrations::list_registrations,
        crate::inbound::http::teams::create_team,
        crate::inbound::http::teams::teams_by_event,
        crate::inbound::http::teams::teams_by_member,
        crate::inbound::http::teams::team_details,
        crate::inbound::http::teams::add_member,
        crate::inbound::http::teams::remove_member,
        crate::inbound::http::teams::update_member,
        crate::inbound::http::cart::get_cart,
        crate::inbound::http::cart::add_item,
        crate::inbound::http::cart::remove_item,
        crate::inbound::http::cart::clear_cart,
        crate::inbound::http::cart::checkout,
        crate::inbound::http::cart::list_orders,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema, SuccessResponse)),
    tags(
        (name = "users", description = "Attendee sign-up and verification"),
        (name = "events", description = "Event catalogue"),
        (name = "registrations", description = "Direct event registrations"),
        (name = "teams", description = "Hackathon team lifecycle"),
        (name = "cart", description = "Event pass carts and orders"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
/// OpenAPI document for the HTTP API.
pub struct ApiDoc;
