//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `FEST_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_EMAIL_DOMAINS, EmailDomains};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime configuration for the HTTP server and the seeded store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEST")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Email domains accepted at registration. The environment form is a
    /// comma-separated list.
    pub allowed_email_domains: Option<Vec<String>>,
    /// JSON file holding the event catalogue. The built-in catalogue is used
    /// when unset.
    pub events_file: Option<PathBuf>,
}

impl AppSettings {
    /// Return the configured interface, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Accepted email domains. Blank entries are ignored; an empty list
    /// falls back to the defaults.
    pub fn email_domains(&self) -> EmailDomains {
        let configured: Vec<&str> = self
            .allowed_email_domains
            .iter()
            .flatten()
            .map(|domain| domain.trim())
            .filter(|domain| !domain.is_empty())
            .collect();
        if configured.is_empty() {
            EmailDomains::new(DEFAULT_EMAIL_DOMAINS)
        } else {
            EmailDomains::new(configured)
        }
    }
}
