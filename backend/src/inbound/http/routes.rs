//! Route table for the `/api` scope.

use actix_web::web;

use crate::inbound::http::error::{json_error_handler, path_error_handler};
use crate::inbound::http::{cart, events, registrations, teams, users};

/// Register every API handler along with the extractor error handlers.
///
/// Callers mount this inside `web::scope("/api")`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(users::register)
        .service(users::verify)
        .service(users::profile)
        .service(events::list_events)
        .service(events::get_event)
        .service(registrations::create_registration)
        .service(registrations::list_registrations)
        .service(teams::create_team)
        .service(teams::teams_by_event)
        .service(teams::teams_by_member)
        .service(teams::team_details)
        .service(teams::add_member)
        .service(teams::remove_member)
        .service(teams::update_member)
        .service(cart::get_cart)
        .service(cart::add_item)
        .service(cart::remove_item)
        .service(cart::clear_cart)
        .service(cart::checkout)
        .service(cart::list_orders);
}
