//! Registration service entry-point: loads settings, compiles the rules and
//! serves the JSON API, the HTML form and OpenAPI docs.

mod server;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use range_registration::inbound::http::health::HealthState;
use server::{AppSettings, ServerConfig, SettingsError, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from(std::env::args_os()).map_err(startup_failure)?;
    let validator = settings.validator().map_err(startup_failure)?;
    let bind_addr = settings.bind_addr().map_err(startup_failure)?;
    info!(
        %bind_addr,
        phone_pattern = ?settings.phone_pattern,
        name_min_length = validator.name_min_length(),
        name_max_length = validator.name_max_length(),
        "starting registration service"
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, validator);
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

fn startup_failure(err: SettingsError) -> std::io::Error {
    error!(error = %err, "invalid configuration");
    std::io::Error::other(err)
}
