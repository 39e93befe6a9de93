//! Products API - REST server

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

use products_api::config::Config;
use products_api::state::AppState;
use products_api::build_router;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // A missing DATABASE_URL or TOKEN_SECRET aborts startup here
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Starting products API");

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let auth = axum_helpers::BearerAuth::new(&config.token);

    let state = AppState { config, db, auth };
    let router = build_router(&state);

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
