//! Backend entry-point: loads settings, seeds the store and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::{EntityStore, Store};
use backend::inbound::http::health::HealthState;
use backend::seed::load_catalogue;
use backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let events = load_catalogue(settings.events_file.as_deref())?;
    let store = EntityStore::new(events).wrap_err("failed to seed the event catalogue")?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        settings.host(),
        settings.port,
        settings.email_domains(),
        Store::new(store),
    );
    let server = create_server(health_state.clone(), config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")?;
    health_state.mark_unhealthy();
    Ok(())
}
