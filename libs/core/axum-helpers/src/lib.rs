//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless bearer-token authentication (shared HS256 secret)
//! - **[`errors`]**: problem-response envelope and the error translator
//! - **[`extractors`]**: validated JSON extraction
//! - **[`http`]**: per-request trace-id middleware
//! - **[`server`]**: router assembly, server startup, health checks
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::{server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let root_routes = Router::new(); // Token issuance, health
//!     let router =
//!         create_router::<ApiDoc>(api_routes, root_routes, Environment::Development);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{BearerAuth, TokenClaims, TokenConfig, TOKEN_TTL_SECS, bearer_auth_middleware};

// Re-export error types
pub use errors::{AppError, Failure, Problem, translate::translate_errors};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export HTTP middleware
pub use http::{TRACE_ID_HEADER, TraceId, trace_id_middleware};

// Re-export server helpers
pub use server::{HealthCheckFuture, create_app, create_router, run_health_checks, shutdown_signal};
