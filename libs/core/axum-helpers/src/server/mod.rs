//! Server assembly, startup, and health checks.

mod app;
mod health;

pub use app::{create_app, create_router, shutdown_signal};
pub use health::{HealthCheckFuture, run_health_checks};
