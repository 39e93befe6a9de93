//! Products API application wiring.
//!
//! The binary in `main.rs` is a thin shell around [`build_router`]; keeping
//! the wiring here lets integration tests drive the exact router the server
//! runs.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::create_router;
use state::AppState;

/// Assemble the complete application router from shared state.
///
/// `/get-token` and `/health` stay outside the bearer gate; everything
/// nested under `/api` sits behind it. The trace-id, request-tracing, and
/// error-translator layers wrap the whole tree, so every failing route
/// produces the uniform problem envelope.
pub fn build_router(state: &AppState) -> Router {
    let api_routes = api::routes(state);
    let root_routes = Router::new()
        .merge(api::auth::router(state.clone()))
        .merge(api::health::router(state.clone()));

    create_router::<openapi::ApiDoc>(api_routes, root_routes, state.config.environment.clone())
}
