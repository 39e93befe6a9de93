//! Stateless bearer-token authentication over a shared secret.

mod config;
mod jwt;
mod middleware;

pub use config::TokenConfig;
pub use jwt::{BearerAuth, TOKEN_TTL_SECS, TokenClaims};
pub use middleware::bearer_auth_middleware;
