//! Service entry-point: reads configuration, connects to the store and
//! serves the REST API, documentation and frontend.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::config::AppConfig;
use users_api::inbound::http::assets::PublicAssets;
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::persistence::{DieselUserRepository, StoreClient};
use users_api::server::{AppDependencies, create_server};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env(&DefaultEnv::new()).wrap_err("invalid configuration")?;

    let client = StoreClient::connect(&config.store).await;
    let health_state = web::Data::new(HealthState::new(client.is_connected()));
    let http_state = web::Data::new(HttpState::new(Arc::new(DieselUserRepository::new(client))));
    let assets = PublicAssets::open(&config.public_dir).wrap_err_with(|| {
        format!(
            "failed to open public directory {}",
            config.public_dir.display()
        )
    })?;
    let deps = AppDependencies {
        http_state,
        health_state,
        assets: web::Data::new(assets),
    };

    if config.suppress_listen {
        info!("APP_ENV=test; not listening");
        return Ok(());
    }

    let server = create_server(deps, config.bind_addr)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;
    info!(port = config.bind_addr.port(), "server is running");
    server.await?;
    Ok(())
}
