//! Configuration for Products API

use axum_helpers::TokenConfig;
use core_config::{server::ServerConfig, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
///
/// Composes shared config components from the core libraries. The database
/// connection string and the token signing secret are both required; loading
/// fails at startup when either is missing.
#[derive(Clone, Debug)]
pub struct Config {
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - fails if DATABASE_URL not set
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8080
        let token = TokenConfig::from_env()?; // Required - fails if TOKEN_SECRET not set

        Ok(Self {
            database,
            server,
            token,
            environment,
        })
    }
}
