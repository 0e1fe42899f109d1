//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::{ClientRepository, InMemoryClientRepository};
use backend::inbound::http::assets::list_assets;
use backend::inbound::http::clients::{
    create_client, delete_client, get_client, list_clients, update_client,
};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::hello::hello;
use backend::inbound::http::json_error_handler;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselClientRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

/// Build the client repository based on configuration.
///
/// Uses the PostgreSQL-backed implementation when a pool is available,
/// otherwise falls back to the in-memory store.
fn build_client_repository(config: &ServerConfig) -> Arc<dyn ClientRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselClientRepository::new(pool.clone())),
        None => Arc::new(InMemoryClientRepository::new()),
    }
}

/// CORS policy for the configured frontend origin.
///
/// `Cors` is not `Clone`, so each worker builds its own instance inside the
/// app factory.
fn cors_policy(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(["GET", "POST", "PUT", "DELETE"])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    allowed_origin: String,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        allowed_origin,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(cors_policy(&allowed_origin))
        .service(hello)
        .service(list_clients)
        .service(get_client)
        .service(create_client)
        .service(update_client)
        .service(delete_client)
        .service(list_assets)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] with binding, CORS, and optional pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(build_client_repository(&config)));
    let ServerConfig {
        bind_addr,
        allowed_origin,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            allowed_origin: allowed_origin.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
