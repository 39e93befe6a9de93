//! Application state management

use axum_helpers::BearerAuth;
use database::postgres::DatabaseConnection;

/// Shared application state
///
/// Cloning is cheap. The connection pool and the signing secret are the only
/// state shared across requests, both read-mostly.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
    pub auth: BearerAuth,
}
