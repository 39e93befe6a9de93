use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// A write that did not durably apply (zero rows affected), as opposed
    /// to a thrown storage-level error
    #[error("product {0} could not be created")]
    NotCreated(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized problem responses.
///
/// `NotCreated` is a classified failure and keeps its message and a 400
/// status; a driver error stays unclassified and surfaces as 500.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotCreated(name) => {
                AppError::BadRequest(format!("product {} could not be created", name))
            }
            ProductError::Database(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
