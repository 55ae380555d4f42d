//! Server construction and middleware wiring.

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpResponse, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
use crate::doc::ApiDoc;
use crate::inbound::http::assets::{PublicAssets, index, static_file};
use crate::inbound::http::error::json_config;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;

/// Path of the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/docs.json";
/// Path of the interactive documentation viewer.
pub const DOCS_PATH: &str = "/docs";

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub http_state: web::Data<HttpState>,
    pub health_state: web::Data<HealthState>,
    pub assets: web::Data<PublicAssets>,
}

/// Build the application: API routes, documentation, probes and assets.
///
/// Registration order matters: the asset fallback only sees requests no
/// other service claimed.
pub fn build_app(
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
        http_state,
        health_state,
        assets,
    } = deps;

    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(assets)
        .app_data(json_config())
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live)
        .route(DOCS_PATH, web::get().to(redirect_to_docs))
        .service(SwaggerUi::new("/docs/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .service(index)
        .default_service(web::to(static_file))
}

async fn redirect_to_docs() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("{DOCS_PATH}/")))
        .finish()
}

/// Bind an Actix HTTP server to `bind_addr`.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(deps: AppDependencies, bind_addr: SocketAddr) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
