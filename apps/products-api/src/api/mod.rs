//! API routes module

pub mod auth;
pub mod health;
pub mod products;

use axum::{middleware, Router};
use axum_helpers::bearer_auth_middleware;

use crate::state::AppState;

/// Creates the API routes without the `/api` prefix; the prefix is added by
/// the `create_router` helper.
///
/// Every route composed here sits behind the bearer-token gate. Token
/// issuance and health live in the root routers, outside the gate.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            bearer_auth_middleware,
        ))
}
