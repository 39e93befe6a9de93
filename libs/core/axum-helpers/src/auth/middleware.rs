use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use super::jwt::BearerAuth;
use crate::errors::AppError;

/// Extract the bearer token from the Authorization header: "Bearer <token>"
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(str::to_owned))
}

/// Bearer authentication middleware.
///
/// Verifies the shared-secret token before anything else touches the
/// request. A missing or malformed credential and a failed signature or
/// expiry check all short-circuit with 401 through the error translator;
/// verified claims are stored in request extensions for downstream handlers.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, routing::get, Router};
/// use axum_helpers::{bearer_auth_middleware, BearerAuth, TokenConfig};
///
/// let auth = BearerAuth::new(&TokenConfig::from_env()?);
///
/// let protected = Router::new()
///     .route("/api/protected", get(protected_handler))
///     .layer(middleware::from_fn_with_state(auth, bearer_auth_middleware));
/// ```
pub async fn bearer_auth_middleware(
    State(auth): State<BearerAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match extract_bearer_token(request.headers()) {
        Some(token) => token,
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err(AppError::Unauthorized("No token provided".to_string()));
        }
    };

    let claims = match auth.verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Token verification failed: {}", e);
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
