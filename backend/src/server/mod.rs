//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{AppSettings, SettingsError};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use range_registration::Trace;
#[cfg(debug_assertions)]
use range_registration::doc::ApiDoc;
use range_registration::inbound::http::error::{json_config, route_not_found};
use range_registration::inbound::http::health::{HealthState, live, ready};
use range_registration::inbound::http::register::{
    form_config, show_register_form, submit_register_form,
};
use range_registration::inbound::http::root::read_root;
use range_registration::inbound::http::state::HttpState;
use range_registration::inbound::http::users::create_user;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(form_config())
        .wrap(Trace)
        .service(read_root)
        .service(create_user)
        .service(show_register_form)
        .service(submit_register_form)
        .service(ready)
        .service(live)
        .default_service(web::to(route_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing the bind address and
///   registration rules.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        validator,
    } = config;
    let http_state = web::Data::new(HttpState::new(validator));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
