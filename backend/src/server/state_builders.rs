//! Builders wiring domain services onto the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use backend::domain::{
    AccountsService, CartService, CatalogueService, EmailDomains, RegistrationService, Store,
    TeamService,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::verification::{RandomCodeGenerator, TracingCodeSender};

/// Build the HTTP state with every service sharing one store and clock.
pub(super) fn build_http_state(store: &Store, email_domains: &EmailDomains) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    web::Data::new(HttpState {
        accounts: Arc::new(AccountsService::new(
            store.clone(),
            Arc::new(RandomCodeGenerator),
            Arc::new(TracingCodeSender),
            email_domains.clone(),
        )),
        catalogue: Arc::new(CatalogueService::new(store.clone())),
        registrations: Arc::new(RegistrationService::new(store.clone())),
        teams: Arc::new(TeamService::new(store.clone(), Arc::clone(&clock))),
        carts: Arc::new(CartService::new(store.clone(), clock)),
    })
}
