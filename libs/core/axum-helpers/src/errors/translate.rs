//! The single chokepoint turning pipeline failures into problem responses.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::Environment;
use tracing::{error, warn};

use super::{Failure, Problem};
use crate::http::TraceId;

/// Error-translator middleware.
///
/// Handlers, extractors, and inner middleware reject through
/// [`AppError`](super::AppError), which attaches a [`Failure`] extension to
/// the response. This layer classifies that failure, emits the matching log
/// entry, and renders the final [`Problem`] body with the request path and
/// trace identifier filled in. Responses without a `Failure` extension pass
/// through untouched.
///
/// Classification order:
/// 1. classified failure: status and title are used verbatim, warn log
/// 2. malformed request body: 400 "Invalid JSON in request body", warn log
/// 3. anything else: 500 "An unexpected error occurred", error log; the
///    failure detail is only echoed in the response outside production
pub async fn translate_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let forwarded_for = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let trace_id = request
        .extensions()
        .get::<TraceId>()
        .cloned()
        .unwrap_or_default();

    let mut response = next.run(request).await;

    let Some(failure) = response.extensions_mut().remove::<Failure>() else {
        return response;
    };

    let problem = match failure {
        Failure::Classified { status, title, errors } => {
            warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                "Request failed: {}",
                title
            );
            Problem::new(status, title, &path, trace_id.as_str()).with_errors(errors)
        }
        Failure::MalformedBody { detail } => {
            warn!(
                method = %method,
                path = %path,
                "Request failed with invalid JSON: {}",
                detail
            );
            Problem::new(
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request body",
                &path,
                trace_id.as_str(),
            )
            .with_detail(detail)
        }
        Failure::Unexpected { detail } => {
            match forwarded_for {
                Some(address) => error!(
                    method = %method,
                    path = %path,
                    forwarded_for = %address,
                    "Unhandled error: {}",
                    detail
                ),
                None => error!(
                    method = %method,
                    path = %path,
                    "Unhandled error: {}",
                    detail
                ),
            }

            let problem = Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred",
                &path,
                trace_id.as_str(),
            );
            if environment.is_production() {
                problem
            } else {
                problem.with_detail(detail)
            }
        }
    };

    problem.into_response()
}
