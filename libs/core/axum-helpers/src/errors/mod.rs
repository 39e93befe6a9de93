pub mod handlers;
pub mod responses;
pub mod translate;

use std::collections::BTreeMap;

use axum::{
    Extension,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Uniform problem envelope returned for every non-2xx response.
///
/// # JSON Example
///
/// ```json
/// {
///   "type": "https://httpstatuses.com/400",
///   "title": "One or more validation errors occurred.",
///   "status": 400,
///   "instance": "/api/products",
///   "traceId": "0b06869db48347af95083b7a7fcd8971",
///   "errors": { "name": ["Name is required"] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Problem {
    /// URI describing the HTTP status
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Short human-readable summary
    pub title: String,
    /// Numeric HTTP status
    pub status: u16,
    /// Optional elaboration; suppressed in production for unexpected failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Path of the request the failure occurred on
    pub instance: String,
    /// Correlation identifier for this request
    #[serde(rename = "traceId")]
    pub trace_id: String,
    /// Field name mapped to its violation messages, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl Problem {
    pub fn new(
        status: StatusCode,
        title: impl Into<String>,
        instance: impl Into<String>,
        trace_id: impl Into<String>,
    ) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.com/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: instance.into(),
            trace_id: trace_id.into(),
            errors: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: Option<BTreeMap<String, Vec<String>>>) -> Self {
        self.errors = errors;
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

/// Classified form of a failure, attached to the response as an extension.
///
/// [`translate::translate_errors`] is the only consumer; it owns the response
/// body, so nothing here carries request context (path, trace id).
#[derive(Debug, Clone)]
pub enum Failure {
    /// The pipeline recognized the failure and chose status and message itself
    Classified {
        status: StatusCode,
        title: String,
        errors: Option<BTreeMap<String, Vec<String>>>,
    },
    /// The request body could not be parsed as JSON
    MalformedBody { detail: String },
    /// Anything unexpected
    Unexpected { detail: String },
}

/// Application error type that every failure in the request pipeline funnels
/// into.
///
/// Converting into a response attaches a [`Failure`] extension; the
/// translator middleware renders the final [`Problem`] body from it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("One or more validation errors occurred.")]
    Validation(BTreeMap<String, Vec<String>>),

    #[error("Invalid JSON in request body")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, violations) in e.field_errors() {
            let messages = violations
                .iter()
                .map(|violation| {
                    violation
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| violation.code.to_string())
                })
                .collect();
            errors.insert(field.to_string(), messages);
        }
        AppError::Validation(errors)
    }
}

impl AppError {
    fn into_failure(self) -> (StatusCode, Failure) {
        match self {
            AppError::BadRequest(title) => (
                StatusCode::BAD_REQUEST,
                Failure::Classified {
                    status: StatusCode::BAD_REQUEST,
                    title,
                    errors: None,
                },
            ),
            AppError::Unauthorized(title) => (
                StatusCode::UNAUTHORIZED,
                Failure::Classified {
                    status: StatusCode::UNAUTHORIZED,
                    title,
                    errors: None,
                },
            ),
            AppError::NotFound(title) => (
                StatusCode::NOT_FOUND,
                Failure::Classified {
                    status: StatusCode::NOT_FOUND,
                    title,
                    errors: None,
                },
            ),
            AppError::MethodNotAllowed(title) => (
                StatusCode::METHOD_NOT_ALLOWED,
                Failure::Classified {
                    status: StatusCode::METHOD_NOT_ALLOWED,
                    title,
                    errors: None,
                },
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Failure::Classified {
                    status: StatusCode::BAD_REQUEST,
                    title: "One or more validation errors occurred.".to_string(),
                    errors: Some(errors),
                },
            ),
            AppError::JsonExtractorRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Failure::MalformedBody {
                    detail: rejection.body_text(),
                },
            ),
            AppError::Internal(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Failure::Unexpected { detail })
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, failure) = self.into_failure();
        (status, Extension(failure)).into_response()
    }
}
