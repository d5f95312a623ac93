//! HTTP server configuration object.

use backend::domain::{EmailDomains, Store};

/// Everything the server needs to bind and wire the domain services.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) email_domains: EmailDomains,
    pub(crate) store: Store,
}

impl ServerConfig {
    /// Construct a server configuration around a seeded store.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, email_domains: EmailDomains, store: Store) -> Self {
        Self {
            host: host.into(),
            port,
            email_domains,
            store,
        }
    }
}
