//! Token issuance endpoint

use axum::{extract::State, routing::post, Json, Router};
use axum_helpers::AppError;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Response body for token issuance
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get-token", post(get_token))
        .with_state(state)
}

/// Issue a bearer token bound to the shared secret.
///
/// Issuance is unauthenticated; the token expires one hour after issuance
/// and is verified by the same secret and algorithm the auth gate uses.
#[utoipa::path(
    post,
    path = "/get-token",
    tag = "Auth",
    responses(
        (status = 200, description = "Signed bearer token", body = TokenResponse)
    )
)]
pub async fn get_token(State(state): State<AppState>) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .auth
        .create_token()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
