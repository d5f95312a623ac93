//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CartCommand, EventCatalogue, RegistrationCommand, TeamLifecycle, UserAccounts,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Sign-up, verification and profiles.
    pub accounts: Arc<dyn UserAccounts>,
    pub catalogue: Arc<dyn EventCatalogue>,
    pub registrations: Arc<dyn RegistrationCommand>,
    /// Team creation and roster changes.
    pub teams: Arc<dyn TeamLifecycle>,
    /// Carts, checkout and orders.
    pub carts: Arc<dyn CartCommand>,
}
